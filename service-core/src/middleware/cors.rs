//! Permissive cross-origin policy shared by every response a function emits.
//!
//! The gateway in front of the functions does not add CORS headers itself, so
//! preflight, success and error responses all carry the same three headers.

use http::{HeaderMap, HeaderValue, Method, Response, StatusCode, header};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "*";
pub const ALLOW_METHODS: &str = "OPTIONS,POST,GET";

/// Body of the preflight response, already JSON-encoded.
pub const PREFLIGHT_BODY: &str = "\"Preflight OK\"";

pub fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
}

pub fn is_preflight(method: &Method) -> bool {
    method == Method::OPTIONS
}

/// Fixed answer to a CORS preflight. Carries no content type.
pub fn preflight_response<B: From<String>>() -> Response<B> {
    let mut response = Response::new(B::from(PREFLIGHT_BODY.to_string()));
    *response.status_mut() = StatusCode::OK;
    apply_cors_headers(response.headers_mut());
    response
}
