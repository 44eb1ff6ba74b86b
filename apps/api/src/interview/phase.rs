//! Decides whether the interviewer asks another question or closes with feedback.

use crate::interview::models::{ConversationHistory, Phase};

/// Interviewer turns after which the conversation switches to feedback.
pub const QUESTION_LIMIT: usize = 6;

/// `Final` iff the history holds exactly `QUESTION_LIMIT` interviewer turns.
///
/// The comparison is equality, not `>=`: a history already past the limit
/// falls back to `Ongoing`.
pub fn decide_phase(history: &ConversationHistory) -> Phase {
    if history.interviewer_turns() == QUESTION_LIMIT {
        Phase::Final
    } else {
        Phase::Ongoing
    }
}
