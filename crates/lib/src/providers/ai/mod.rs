pub mod gemini;
pub mod invoke;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use regex::Regex;
use serde_json::Value;
use std::fmt::Debug;

/// A trait for interacting with a structured-output AI provider.
///
/// Implementations send one natural-language prompt together with a JSON
/// Schema describing the desired output, and return the JSON object the model
/// produced. The object is not validated against the schema.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a JSON object for the given prompt and response schema.
    async fn generate(&self, prompt: &str, response_schema: &Value)
        -> Result<Value, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Parses model text as JSON, stripping a surrounding Markdown code fence if present.
pub fn extract_json(raw: &str) -> Result<Value, PromptError> {
    let re = Regex::new(r"```(?:json)?\s*([\s\S]*?)```")?;
    let body = re
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| raw.trim());

    if body.is_empty() {
        return Err(PromptError::MalformedResponse(
            "the model returned no content".to_string(),
        ));
    }
    Ok(serde_json::from_str(body)?)
}

/// Accepts either a JSON object or a JSON string that itself holds an object.
pub(crate) fn into_object(value: Value) -> Result<Value, PromptError> {
    match value {
        Value::Object(_) => Ok(value),
        Value::String(text) => into_object(extract_json(&text)?),
        other => Err(PromptError::MalformedResponse(format!(
            "expected a JSON object, got: {other}"
        ))),
    }
}
