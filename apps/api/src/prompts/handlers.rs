//! Axum route handlers for the admin prompt API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::prompts::{PromptInfo, PromptType};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptUpdateRequest {
    pub content: String,
}

/// GET /api/admin/status
/// Accessibility ping for the admin panel.
pub async fn handle_admin_status() -> &'static str {
    "Admin panel is accessible"
}

fn resolve(key: &str) -> Result<PromptType, AppError> {
    PromptType::from_key(key)
        .ok_or_else(|| AppError::NotFound(format!("Unknown prompt type: {key}")))
}

/// GET /api/admin/prompts
pub async fn handle_list_prompts(State(state): State<AppState>) -> Json<Vec<PromptInfo>> {
    Json(state.prompts.all())
}

/// GET /api/admin/prompts/:type
pub async fn handle_get_prompt(
    State(state): State<AppState>,
    Path(prompt_type): Path<String>,
) -> Result<Json<PromptInfo>, AppError> {
    let prompt_type = resolve(&prompt_type)?;
    Ok(Json(state.prompts.info(prompt_type)))
}

/// PUT /api/admin/prompts/:type
pub async fn handle_update_prompt(
    State(state): State<AppState>,
    Path(prompt_type): Path<String>,
    Json(request): Json<PromptUpdateRequest>,
) -> Result<Json<PromptInfo>, AppError> {
    let prompt_type = resolve(&prompt_type)?;
    if request.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Prompt content cannot be empty".to_string(),
        ));
    }

    state.prompts.set(prompt_type, request.content);
    info!("Prompt '{}' updated", prompt_type.key());
    Ok(Json(state.prompts.info(prompt_type)))
}

/// POST /api/admin/prompts/:type/reset
pub async fn handle_reset_prompt(
    State(state): State<AppState>,
    Path(prompt_type): Path<String>,
) -> Result<Json<PromptInfo>, AppError> {
    let prompt_type = resolve(&prompt_type)?;
    state.prompts.reset(prompt_type);
    info!("Prompt '{}' reset to default", prompt_type.key());
    Ok(Json(state.prompts.info(prompt_type)))
}
