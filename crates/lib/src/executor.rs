//! # Generation Request Executor
//!
//! Sends one instruction + schema to the configured AI provider and decodes
//! the answer into a typed `GenerationResult`. Every failure, whatever its
//! cause, surfaces as `GenerationError::ServiceUnavailable`; the cause is only
//! logged.

use crate::{
    errors::GenerationError,
    providers::ai::AiProvider,
    schema::ResponseSchema,
    types::{ContentType, GenerationResult},
};
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct GenerationExecutor {
    ai_provider: Box<dyn AiProvider>,
}

impl GenerationExecutor {
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Performs exactly one call to the generation service. No retries.
    pub async fn execute(
        &self,
        instruction: &str,
        schema: &ResponseSchema,
        content_type: ContentType,
    ) -> Result<GenerationResult, GenerationError> {
        let unavailable = || GenerationError::ServiceUnavailable {
            subject: content_type.subject().to_string(),
        };

        info!("[execute] Requesting {} from AI provider.", content_type);
        debug!(instruction = %instruction, "--> Sending prompt to AI Provider");

        let raw = self
            .ai_provider
            .generate(instruction, &schema.to_json_schema())
            .await
            .map_err(|e| {
                error!("[execute] AI provider call for {content_type} failed: {e}");
                unavailable()
            })?;

        debug!("<-- Raw {} payload: {}", content_type, raw);

        GenerationResult::from_value(content_type, raw).map_err(|e| {
            error!("[execute] Could not decode {content_type} payload: {e}");
            unavailable()
        })
    }
}
