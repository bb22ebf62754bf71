pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod services;
pub mod startup;
