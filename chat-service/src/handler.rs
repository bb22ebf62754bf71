//! Chat request handler.
//!
//! Every path returns a well-formed response with CORS headers; failures are
//! turned into a 500 carrying the error text instead of propagating.

use crate::error::ChatError;
use crate::models::ChatRequest;
use crate::services::build_prompt;
use crate::services::providers::{GenerationParams, TextProvider};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::json;
use service_core::middleware::{is_preflight, preflight_response};
use service_core::response::json_response;
use std::sync::Arc;
use tracing::Instrument;

/// Reply used when the model returns no candidates.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

/// Handles chat requests against a shared text provider.
#[derive(Clone)]
pub struct ChatHandler {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl ChatHandler {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider,
            params: GenerationParams::default(),
        }
    }

    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    /// Serve one request. Never fails.
    pub async fn handle(&self, request: Request) -> Response<Body> {
        let request_id = request
            .lambda_context_ref()
            .map(|ctx| ctx.request_id.clone())
            .unwrap_or_default();
        let span = tracing::info_span!(
            "chat_request",
            request_id = %request_id,
            method = %request.method()
        );

        async move {
            if is_preflight(request.method()) {
                tracing::debug!("Answering CORS preflight");
                return preflight_response::<Body>();
            }

            match self.reply(request.body().as_ref()).await {
                Ok(reply) => json_response::<Body>(StatusCode::OK, &json!({ "response": reply })),
                Err(e) => {
                    tracing::error!(error = %e, kind = e.kind(), "Chat request failed");
                    json_response::<Body>(e.status_code(), &json!({ "error": e.to_string() }))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn reply(&self, body: &[u8]) -> Result<String, ChatError> {
        let chat_request = ChatRequest::from_slice(body)?;
        let prompt = build_prompt(&chat_request.history, &chat_request.message);

        tracing::info!(
            model = %self.provider.model_id(),
            history_turns = chat_request.history.len(),
            prompt_len = prompt.len(),
            "Invoking text model"
        );

        let response = self.provider.generate(&prompt, &self.params).await?;

        tracing::info!(
            candidates = response.candidates.len(),
            input_tokens = ?response.input_tokens,
            output_tokens = ?response.output_tokens,
            "Text model responded"
        );

        match response.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                tracing::warn!("Text model returned no candidates, using fallback reply");
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }
}
