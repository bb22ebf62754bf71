//! Request and response bodies for Amazon Titan text models on Bedrock.

use crate::services::providers::GenerationParams;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanRequest<'a> {
    pub input_text: &'a str,
    pub text_generation_config: TextGenerationConfig<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextGenerationConfig<'a> {
    pub max_token_count: i32,
    pub temperature: f32,
    pub top_p: f32,
    pub stop_sequences: &'a [String],
}

impl<'a> TitanRequest<'a> {
    pub fn new(prompt: &'a str, params: &'a GenerationParams) -> Self {
        Self {
            input_text: prompt,
            text_generation_config: TextGenerationConfig {
                max_token_count: params.max_tokens,
                temperature: params.temperature,
                top_p: params.top_p,
                stop_sequences: &params.stop_sequences,
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResponse {
    #[serde(default)]
    pub input_text_token_count: Option<i32>,

    /// Missing and null both decode to no results.
    #[serde(default)]
    pub results: Option<Vec<TitanResult>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResult {
    #[serde(default)]
    pub token_count: Option<i32>,

    #[serde(default)]
    pub output_text: Option<String>,

    #[serde(default)]
    pub completion_reason: Option<String>,
}

impl TitanResponse {
    pub fn results(&self) -> &[TitanResult] {
        self.results.as_deref().unwrap_or_default()
    }

    /// Output text of every result, in order. A result without text counts as empty.
    pub fn output_texts(&self) -> Vec<String> {
        self.results()
            .iter()
            .map(|r| r.output_text.clone().unwrap_or_default())
            .collect()
    }

    pub fn output_token_count(&self) -> Option<i32> {
        self.results().first().and_then(|r| r.token_count)
    }
}
