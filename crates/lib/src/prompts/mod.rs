//! # Prompt Builder
//!
//! Turns a `GenerationRequest` into the instruction text and response schema
//! sent to the generation service. Building a prompt is pure string
//! formatting: it has no side effects and cannot fail.

pub mod templates;

use crate::{schema::ResponseSchema, types::GenerationRequest};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(topic|audience|tone)\}").expect("placeholder pattern is valid")
});

/// Used when the request carries no (or a blank) audience.
pub const DEFAULT_AUDIENCE: &str = "general audience";

/// The instruction and schema for a single generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPrompt {
    pub instruction: String,
    pub schema: ResponseSchema,
}

/// Fills `template` with the request's topic, audience and tone.
///
/// The topic is not validated here; callers must reject blank topics first.
pub fn build_prompt(
    request: &GenerationRequest,
    template: &str,
    default_tone: &str,
) -> BuiltPrompt {
    let instruction = fill_template(
        template,
        &request.topic,
        request.audience().unwrap_or(DEFAULT_AUDIENCE),
        request.tone().unwrap_or(default_tone),
    );
    BuiltPrompt {
        instruction,
        schema: ResponseSchema::for_content_type(request.content_type),
    }
}

/// Substitutes the known placeholders in a single pass. Unknown placeholders
/// are left as-is, and inserted values are never scanned again.
pub fn fill_template(template: &str, topic: &str, audience: &str, tone: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "topic" => topic.to_string(),
            "audience" => audience.to_string(),
            _ => tone.to_string(),
        })
        .into_owned()
}
