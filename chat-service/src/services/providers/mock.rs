//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Succeed with these candidates.
    Candidates(Vec<String>),

    /// Fail with an invocation error carrying this message.
    Fail(String),
}

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub params: GenerationParams,
}

/// Mock text provider for testing. Records every call it receives.
#[derive(Debug)]
pub struct MockTextProvider {
    outcome: MockOutcome,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Succeed with a single candidate.
    pub fn replying(text: &str) -> Self {
        Self::new(MockOutcome::Candidates(vec![text.to_string()]))
    }

    /// Succeed with no candidates.
    pub fn empty() -> Self {
        Self::new(MockOutcome::Candidates(Vec::new()))
    }

    pub fn failing(message: &str) -> Self {
        Self::new(MockOutcome::Fail(message.to_string()))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                params: params.clone(),
            });
        }

        match &self.outcome {
            MockOutcome::Candidates(candidates) => Ok(ProviderResponse {
                candidates: candidates.clone(),
                input_tokens: Some(prompt.len() as i32 / 4),
                output_tokens: Some(candidates.first().map_or(0, |c| c.len() as i32 / 4)),
            }),
            MockOutcome::Fail(message) => Err(ProviderError::Invocation(message.clone())),
        }
    }

    fn model_id(&self) -> &str {
        "mock-text-model"
    }
}
