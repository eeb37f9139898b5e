use anycopy::{ContentType, GenerationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// The request body for `POST /generate/{content_type}`.
#[derive(Deserialize, Debug)]
pub struct GenerateRequest {
    pub topic: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

/// The response body for `POST /generate/{content_type}`.
#[derive(Serialize, Debug)]
pub struct GenerateResponse {
    pub content_type: ContentType,
    pub result: GenerationResult,
    /// The result rendered as display text.
    pub rendered: String,
}
