//! # Generation Route Handlers
//!
//! This module contains the handler shared by all three generators. Each
//! request is validated, turned into a prompt, sent to the generation service
//! exactly once, normalized, and returned together with a rendered version.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::{GenerateRequest, GenerateResponse};
use anycopy::{render::render, ContentType, GenerationRequest};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;
use tracing::info;

/// Handler for `POST /generate/{content_type}`.
///
/// `content_type` accepts the short slug (`blog`, `instagram`, `youtube`) or
/// the canonical name (`instagram_caption`, `youtube_metadata`).
pub async fn generate_handler(
    State(app_state): State<AppState>,
    Path(content_type): Path<String>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<ApiResponse<GenerateResponse>>, AppError> {
    let content_type: ContentType = content_type.parse().map_err(AppError::NotFound)?;
    info!(
        "Received {} generation request for topic: '{}'",
        content_type, payload.topic
    );

    let generator = app_state.generator(content_type).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "No generator configured for '{content_type}'"
        ))
    })?;

    let request = GenerationRequest {
        content_type,
        topic: payload.topic.trim().to_string(),
        audience: payload.audience,
        tone: payload.tone,
    };
    request.validate()?;

    let prompt = generator.prepare(&request);
    let result = generator.complete(&prompt).await?;
    let rendered = render(&result, &request, generator.profile());

    let debug_info = json!({
        "prompt": prompt.instruction,
        "response_json_schema": prompt.schema.to_json_schema(),
    });

    Ok(wrap_response(
        GenerateResponse {
            content_type,
            result,
            rendered,
        },
        debug_params,
        Some(debug_info),
    ))
}
