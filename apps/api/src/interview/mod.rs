// Interview conversation: history model, transcript rendering, phase
// selection, prompt templates and per-turn orchestration.
// All provider calls go through llm_client::TextGenerator.

pub mod handlers;
pub mod models;
pub mod phase;
pub mod prompts;
pub mod session;
pub mod transcript;
