pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::background::handlers::handle_generate_background;
use crate::interview::handlers::handle_interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/interview", post(handle_interview))
        .route("/generate-background", post(handle_generate_background))
        .with_state(state)
}
