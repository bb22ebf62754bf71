//! Process startup and the Lambda event loop.
//!
//! Clients are built once per execution environment and reused by every
//! invocation it serves.

use crate::config::ChatConfig;
use crate::handler::ChatHandler;
use crate::services::providers::bedrock::BedrockTextProvider;
use crate::services::providers::TextProvider;
use aws_config::{BehaviorVersion, Region};
use lambda_http::{service_fn, Body, Request, Response};
use service_core::error::AppError;
use service_core::observability::init_tracing;
use std::sync::Arc;

/// Log level used when the configuration itself could not be loaded.
const FALLBACK_LOG_LEVEL: &str = "info";

/// Install tracing from a configuration load result.
///
/// A failed load still brings tracing up with defaults so the error is logged
/// before it is returned.
pub fn init_observability(
    service_name: &str,
    loaded: Result<ChatConfig, AppError>,
) -> Result<ChatConfig, AppError> {
    match loaded {
        Ok(config) => {
            init_tracing(
                service_name,
                &config.common.log_level,
                config.common.otlp_endpoint.as_deref(),
            );
            Ok(config)
        }
        Err(e) => {
            init_tracing(service_name, FALLBACK_LOG_LEVEL, None);
            tracing::error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// Application container for the function's lifecycle.
pub struct Application {
    handler: ChatHandler,
}

impl Application {
    /// Resolve AWS configuration and build the Bedrock-backed handler.
    pub async fn build(config: ChatConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.bedrock.region.clone()))
            .load()
            .await;

        let text_provider: Arc<dyn TextProvider> = Arc::new(BedrockTextProvider::from_sdk_config(
            &sdk_config,
            config.bedrock.clone(),
        ));

        tracing::info!(
            model = %config.bedrock.model_id,
            region = %config.bedrock.region,
            "Initialized Bedrock text provider"
        );

        Self::with_provider(text_provider)
    }

    /// Build around an arbitrary provider.
    pub fn with_provider(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            handler: ChatHandler::new(provider),
        }
    }

    pub fn handler(&self) -> &ChatHandler {
        &self.handler
    }

    /// Serve invocations until the runtime shuts the environment down.
    pub async fn run(self) -> Result<(), lambda_http::Error> {
        let handler = Arc::new(self.handler);

        lambda_http::run(service_fn(move |request: Request| {
            let handler = Arc::clone(&handler);
            async move { Ok::<Response<Body>, lambda_http::Error>(handler.handle(request).await) }
        }))
        .await
    }
}
