//! # General Route Handlers
//!
//! The root banner, the health check, and the generator catalog that stands
//! in for the navigation menu and home page.

use super::{ApiResponse, AppState};
use anycopy::GeneratorInfo;
use axum::{extract::State, Json};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "anycopy server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Lists the available generators (`GET /generators`).
///
/// The catalog is static, so there is no debug payload to attach.
pub async fn list_generators_handler(
    State(app_state): State<AppState>,
) -> Json<ApiResponse<Vec<GeneratorInfo>>> {
    let catalog = app_state
        .catalog()
        .iter()
        .map(|generator| generator.profile().info())
        .collect();
    Json(ApiResponse {
        debug: None,
        result: catalog,
    })
}
