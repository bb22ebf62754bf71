//! JSON response shaping for gateway-fronted functions.

use crate::middleware::cors::apply_cors_headers;
use http::{HeaderValue, Response, StatusCode, header};
use serde_json::Value;

/// Build a JSON response with the content type and CORS headers attached.
///
/// Generic over the body type so any `From<String>` body works, including
/// the Lambda gateway body.
pub fn json_response<B: From<String>>(status: StatusCode, body: &Value) -> Response<B> {
    let mut response = Response::new(B::from(body.to_string()));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    apply_cors_headers(headers);

    response
}
