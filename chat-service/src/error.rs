use crate::services::providers::ProviderError;
use lambda_http::http::StatusCode;
use thiserror::Error;

/// Failures while serving a chat request.
///
/// Both variants surface to the caller as the same 500 response; the split
/// exists for logs.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Invalid request body: {0}")]
    InputDecode(String),

    #[error("Model invocation failed: {0}")]
    ServiceInvocation(#[from] ProviderError),
}

impl ChatError {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatError::InputDecode(_) => "input_decode",
            ChatError::ServiceInvocation(_) => "service_invocation",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::InputDecode(err.to_string())
    }
}
