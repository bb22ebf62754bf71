//! Bedrock runtime provider for Amazon Titan text models.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use crate::config::BedrockConfig;
use crate::models::{TitanRequest, TitanResponse};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bedrock text provider.
///
/// The SDK client is cheap to clone and safe to share across concurrent
/// invocations; it is built once per process.
#[derive(Debug, Clone)]
pub struct BedrockTextProvider {
    config: BedrockConfig,
    client: Client,
}

impl BedrockTextProvider {
    pub fn new(client: Client, config: BedrockConfig) -> Self {
        Self { config, client }
    }

    pub fn from_sdk_config(sdk_config: &aws_config::SdkConfig, config: BedrockConfig) -> Self {
        Self::new(Client::new(sdk_config), config)
    }
}

#[async_trait]
impl TextProvider for BedrockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let payload = serde_json::to_vec(&TitanRequest::new(prompt, params))
            .map_err(|e| ProviderError::Encode(e.to_string()))?;

        tracing::debug!(
            model = %self.config.model_id,
            prompt_len = prompt.len(),
            "Sending request to Bedrock"
        );

        let output = self
            .client
            .invoke_model()
            .model_id(&self.config.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| ProviderError::Invocation(DisplayErrorContext(e).to_string()))?;

        let response: TitanResponse = serde_json::from_slice(output.body().as_ref())
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        Ok(ProviderResponse {
            candidates: response.output_texts(),
            input_tokens: response.input_text_token_count,
            output_tokens: response.output_token_count(),
        })
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }
}
