//! Interview orchestration: one candidate utterance in, one interviewer reply out.
//!
//! Flow: append candidate turn → render transcript → decide phase →
//!       build prompt → text generator → append interviewer turn.
//!
//! Nothing is retained between requests; the caller resends the full history.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::interview::models::{ConversationHistory, InterviewContext, Turn};
use crate::interview::phase::decide_phase;
use crate::interview::prompts::build_prompt;
use crate::interview::transcript::render;
use crate::llm_client::TextGenerator;

/// Result of one turn: the raw reply plus the history extended by exactly
/// the candidate turn and the interviewer turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: String,
    pub history: ConversationHistory,
}

/// Drives interview turns against an injected text generator.
#[derive(Clone)]
pub struct Interviewer {
    generator: Arc<dyn TextGenerator>,
}

impl Interviewer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Runs a single turn. On generator failure nothing is returned but the
    /// error; `history` is never modified.
    pub async fn run_turn(
        &self,
        context: &InterviewContext,
        history: &ConversationHistory,
        candidate_utterance: &str,
    ) -> Result<TurnOutcome, AppError> {
        let with_answer = history.appended(Turn::candidate(candidate_utterance));
        let transcript = render(&with_answer);
        let phase = decide_phase(&with_answer);

        info!(
            "Interview turn: history_len={}, interviewer_turns={}, phase={:?}",
            with_answer.len(),
            with_answer.interviewer_turns(),
            phase
        );

        let prompt = build_prompt(phase, context, &transcript);
        debug!("Interview prompt:\n{prompt}");

        let reply = self
            .generator
            .generate_text(&prompt)
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        let history = with_answer.appended(Turn::interviewer(reply.clone()));

        Ok(TurnOutcome { reply, history })
    }
}
