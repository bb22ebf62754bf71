//! service-core: Shared infrastructure for the chat relay functions.
pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod observability;

pub use serde_json;
pub use tracing;
