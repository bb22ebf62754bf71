pub mod cors;

pub use cors::{apply_cors_headers, is_preflight, preflight_response};
