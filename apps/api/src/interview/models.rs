//! Conversation data model: who said what, in which order, for which role.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

const CANDIDATE_ROLE: &str = "user";
const INTERVIEWER_ROLE: &str = "interviewer";
/// Stands in for a candidate who did not give their name.
const UNNAMED_CANDIDATE: &str = "the candidate";

/// Speaker of a turn.
///
/// Callers echo history back verbatim, so role strings outside the two known
/// ones are kept as `Other` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Role {
    Candidate,
    Interviewer,
    Other(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            CANDIDATE_ROLE => Role::Candidate,
            INTERVIEWER_ROLE => Role::Interviewer,
            _ => Role::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Candidate => CANDIDATE_ROLE.to_string(),
            Role::Interviewer => INTERVIEWER_ROLE.to_string(),
            Role::Other(raw) => raw,
        }
    }
}

/// One utterance in the conversation.
///
/// Caller history is not validated: a missing or `null` role stays absent,
/// and non-string roles or content are kept as their JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(
        default,
        deserialize_with = "lenient_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "lenient_content")]
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            content: content.into(),
        }
    }

    pub fn candidate(content: impl Into<String>) -> Self {
        Self::new(Role::Candidate, content)
    }

    pub fn interviewer(content: impl Into<String>) -> Self {
        Self::new(Role::Interviewer, content)
    }
}

fn lenient_role<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Role>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(raw) => Some(Role::from(raw)),
        other => Some(Role::Other(other.to_string())),
    })
}

fn lenient_content<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Ordered, append-only conversation. Oldest turn first.
///
/// Extending a history always yields a new value; the original is left as
/// the caller supplied it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory(Vec<Turn>);

impl From<Vec<Turn>> for ConversationHistory {
    fn from(turns: Vec<Turn>) -> Self {
        Self(turns)
    }
}

impl ConversationHistory {
    /// Returns a copy of this history with `turn` appended.
    pub fn appended(&self, turn: Turn) -> Self {
        let mut turns = Vec::with_capacity(self.0.len() + 1);
        turns.extend_from_slice(&self.0);
        turns.push(turn);
        Self(turns)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of turns whose role is exactly `Interviewer`.
    pub fn interviewer_turns(&self) -> usize {
        self.0
            .iter()
            .filter(|t| t.role == Some(Role::Interviewer))
            .count()
    }
}

impl FromIterator<Turn> for ConversationHistory {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Per-request facts about the interview the prompt is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewContext {
    pub job_title: String,
    pub candidate_name: String,
}

impl InterviewContext {
    /// Builds a context, rejecting a blank job title.
    /// A blank name is replaced with a neutral placeholder.
    pub fn new(job_title: &str, candidate_name: &str) -> Result<Self, AppError> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
        }

        let candidate_name = match candidate_name.trim() {
            "" => UNNAMED_CANDIDATE,
            name => name,
        };

        Ok(Self {
            job_title: job_title.to_string(),
            candidate_name: candidate_name.to_string(),
        })
    }
}

/// Conversational mode, derived from the history on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still asking questions.
    Ongoing,
    /// Closing feedback instead of another question.
    Final,
}
