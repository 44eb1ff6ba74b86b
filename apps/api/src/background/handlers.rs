//! Axum route handler for background image generation.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::background::prompts::background_prompt;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundRequest {
    #[serde(default)]
    pub job_title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundResponse {
    pub image_url: String,
}

/// POST /generate-background
///
/// Returns the first inline image of the provider response as a PNG data URI.
/// The job title is not validated.
pub async fn handle_generate_background(
    State(state): State<AppState>,
    payload: Result<Json<BackgroundRequest>, JsonRejection>,
) -> Result<Json<BackgroundResponse>, AppError> {
    let Json(request) = payload?;
    let job_title = request.job_title.unwrap_or_default();
    info!("Generating interview background for '{job_title}'");

    let prompt = background_prompt(&job_title);
    let generator = state.image_generator.clone();

    let image = tokio::spawn(async move { generator.generate_image(&prompt).await })
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::ImageGeneration(e.to_string()))?;

    debug!("Provider returned {} image", image.mime_type);

    Ok(Json(BackgroundResponse {
        image_url: format!("data:image/png;base64,{}", image.data),
    }))
}
