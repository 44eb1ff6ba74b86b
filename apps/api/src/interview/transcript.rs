//! Flattens a conversation history into the plain-text transcript handed to the model.

use crate::interview::models::{ConversationHistory, Role};

const CANDIDATE_LABEL: &str = "Candidate";
const INTERVIEWER_LABEL: &str = "Interviewer";

/// Any role other than `Candidate`, including none, is labelled as the interviewer.
fn label(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Candidate) => CANDIDATE_LABEL,
        _ => INTERVIEWER_LABEL,
    }
}

/// Renders one `<Label>: <content>` line per turn, oldest first, joined by `\n`.
/// An empty history renders as an empty string.
pub fn render(history: &ConversationHistory) -> String {
    history
        .turns()
        .iter()
        .map(|turn| format!("{}: {}", label(turn.role.as_ref()), turn.content))
        .collect::<Vec<_>>()
        .join("\n")
}
