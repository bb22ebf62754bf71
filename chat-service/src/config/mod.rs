use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Region hosting the Bedrock runtime endpoint.
const DEFAULT_BEDROCK_REGION: &str = "us-east-1";

/// Amazon Titan Text Express, the model the request payload is shaped for.
const DEFAULT_BEDROCK_MODEL_ID: &str = "amazon.titan-text-express-v1";

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub bedrock: BedrockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BedrockConfig {
    pub region: String,
    pub model_id: String,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(ChatConfig {
            common: common_config,
            bedrock: BedrockConfig {
                region: get_env("BEDROCK_REGION", Some(DEFAULT_BEDROCK_REGION))?,
                model_id: get_env("BEDROCK_MODEL_ID", Some(DEFAULT_BEDROCK_MODEL_ID))?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}
