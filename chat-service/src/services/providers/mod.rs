//! Text generation provider abstraction.
//!
//! The handler talks to a [`TextProvider`] so the Bedrock backend can be
//! swapped for the in-process mock in tests.

pub mod bedrock;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("{0}")]
    Invocation(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

/// Result of a generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderResponse {
    /// Generated candidates in the order the model returned them.
    pub candidates: Vec<String>,

    /// Input tokens consumed, when reported.
    pub input_tokens: Option<i32>,

    /// Output tokens generated for the first candidate, when reported.
    pub output_tokens: Option<i32>,
}

impl ProviderResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }
}

/// Sampling parameters for a generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
    pub stop_sequences: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            top_p: 0.9,
            stop_sequences: Vec::new(),
        }
    }
}

/// Trait for text generation providers (e.g., Bedrock).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a completion for `prompt`.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Identifier of the model requests are sent to.
    fn model_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation_params() {
        let params = GenerationParams::default();
        assert_eq!(params.max_tokens, 300);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.9);
        assert!(params.stop_sequences.is_empty());
    }

    #[test]
    fn test_first_text() {
        let response = ProviderResponse {
            candidates: vec!["first".to_string(), "second".to_string()],
            ..Default::default()
        };
        assert_eq!(response.first_text(), Some("first"));
        assert_eq!(ProviderResponse::default().first_text(), None);
    }
}
