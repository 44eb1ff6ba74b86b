use std::sync::Arc;

use crate::interview::session::Interviewer;
use crate::llm_client::ImageGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no conversation data; every request carries its own history.
#[derive(Clone)]
pub struct AppState {
    pub interviewer: Interviewer,
    /// Pluggable image backend. Default: the Gemini `LlmClient`.
    pub image_generator: Arc<dyn ImageGenerator>,
}
