//! Axum route handlers for the Interview API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::models::{ConversationHistory, InterviewContext};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRequest {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_response: Option<String>,
    #[serde(default)]
    pub history: Option<ConversationHistory>,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub response: String,
    pub history: ConversationHistory,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /interview
///
/// Appends the candidate's answer, asks the model for the interviewer's next
/// turn and returns it with the extended history. Missing `jobTitle` or
/// `userResponse` is rejected before any provider call.
pub async fn handle_interview(
    State(state): State<AppState>,
    payload: Result<Json<InterviewRequest>, JsonRejection>,
) -> Result<Json<InterviewResponse>, AppError> {
    let Json(request) = payload?;

    let context = InterviewContext::new(
        request.job_title.as_deref().unwrap_or_default(),
        request.name.as_deref().unwrap_or_default(),
    )?;

    let user_response = request.user_response.unwrap_or_default();
    if user_response.trim().is_empty() {
        return Err(AppError::Validation(
            "userResponse cannot be empty".to_string(),
        ));
    }

    let history = request.history.unwrap_or_default();
    if history.is_empty() {
        info!("Starting interview for '{}'", context.job_title);
    }
    let interviewer = state.interviewer.clone();

    // Spawned so a dropped client connection does not cancel the provider call.
    let outcome = tokio::spawn(async move {
        interviewer
            .run_turn(&context, &history, &user_response)
            .await
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))??;

    Ok(Json(InterviewResponse {
        response: outcome.reply,
        history: outcome.history,
    }))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::interview::session::Interviewer;
    use crate::testing::{FakeImageGenerator, GatedGenerator};

    #[tokio::test]
    async fn test_dropped_request_lets_generation_finish() {
        let generator = GatedGenerator::new();
        let state = AppState {
            interviewer: Interviewer::new(generator.clone()),
            image_generator: FakeImageGenerator::empty(),
        };
        let request = InterviewRequest {
            job_title: Some("Mechanic".to_string()),
            name: Some("Sam".to_string()),
            user_response: Some("Hi".to_string()),
            history: None,
        };

        let in_flight = tokio::spawn(handle_interview(State(state), Ok(Json(request))));
        generator.wait_started().await;

        // Client goes away while the provider call is pending.
        in_flight.abort();
        assert!(in_flight.await.unwrap_err().is_cancelled());

        generator.release();
        tokio::time::timeout(Duration::from_secs(5), generator.wait_finished())
            .await
            .expect("provider call should run to completion after the request is dropped");
    }
}
