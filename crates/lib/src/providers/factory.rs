//! # AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from
//! configuration. By placing it in the `lib` crate, both the server and the CLI
//! build providers the same way.

use crate::{
    errors::PromptError,
    providers::ai::{
        gemini::GeminiProvider, invoke::InvokeLlmProvider, local::LocalAiProvider, AiProvider,
    },
};
use serde::Deserialize;
use tracing::info;

/// Used for Gemini when no model name is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// The settings needed to reach one generation service.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ProviderConfig {
    /// The type of provider: "invoke", "gemini" or "local".
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key. Required for Gemini only.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Creates an AI provider from its configuration.
///
/// Empty strings count as unset, so `${VAR}` substitutions of missing
/// environment variables behave like omitted keys.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, PromptError> {
    let kind = config.provider.trim().to_lowercase();
    let api_url = non_empty(&config.api_url);
    let api_key = non_empty(&config.api_key);
    let model_name = non_empty(&config.model_name);

    let provider: Box<dyn AiProvider> = match kind.as_str() {
        "invoke" => {
            let api_url = api_url.ok_or_else(|| PromptError::MissingApiUrl(kind.clone()))?;
            info!("Configuring InvokeLLM provider with URL: {}", api_url);
            Box::new(InvokeLlmProvider::new(api_url, api_key)?)
        }
        "gemini" => {
            let api_key = api_key.ok_or_else(|| PromptError::MissingApiKey(kind.clone()))?;
            let api_url = api_url.unwrap_or_else(|| {
                GeminiProvider::default_url(model_name.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL))
            });
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let api_url = api_url.ok_or_else(|| PromptError::MissingApiUrl(kind.clone()))?;
            info!("Configuring Local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(api_url, api_key, model_name)?)
        }
        _ => return Err(PromptError::UnsupportedProvider(config.provider.clone())),
    };

    Ok(provider)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
