//! Error types for the assignment engine
//!
//! Local errors are pre-flight checks that block the action before any
//! network call is made. Only [`AssignmentError::Backend`] crosses the I/O
//! boundary; it is propagated to the caller unmodified and never retried.

use crate::backend::BackendError;
use thiserror::Error;

/// Main error type for assignment and transfer operations
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("no agent selected")]
    NoAgentSelected,

    #[error("agent '{agent_id}' is at capacity ({active}/{capacity} active cases)")]
    AgentAtCapacity {
        agent_id: String,
        active: u32,
        capacity: u32,
    },

    #[error("case is already assigned to agent '{agent_id}'")]
    SameAgentTransfer { agent_id: String },

    #[error("invalid transfer reason '{value}'")]
    InvalidReason { value: String },

    #[error("agent '{agent_id}' not present in the current roster snapshot")]
    AgentNotFound { agent_id: String },

    #[error("case '{case_id}' not present in the current snapshot")]
    CaseNotFound { case_id: String },

    #[error("session has expired; re-authenticate with the identity provider")]
    SessionExpired,

    #[error("backend rejected the request: {0}")]
    Backend(#[from] BackendError),

    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AssignmentError {
    /// Create an at-capacity error from the metrics that failed the gate
    pub fn at_capacity(agent_id: impl Into<String>, active: u32, capacity: u32) -> Self {
        Self::AgentAtCapacity {
            agent_id: agent_id.into(),
            active,
            capacity,
        }
    }

    pub fn agent_not_found(agent_id: impl Into<String>) -> Self {
        Self::AgentNotFound {
            agent_id: agent_id.into(),
        }
    }

    pub fn case_not_found(case_id: impl Into<String>) -> Self {
        Self::CaseNotFound {
            case_id: case_id.into(),
        }
    }

    /// Whether this error was raised locally, before any network call
    pub fn is_preflight(&self) -> bool {
        !matches!(self, AssignmentError::Backend(_))
    }
}

/// Sanitize backend-supplied text before it reaches logs or error messages
///
/// Redacts credential-looking patterns and truncates oversized payloads.
pub(crate) fn sanitize_message(message: &str) -> String {
    let mut sanitized = regex::Regex::new(r"(?i)(password|token|key|secret)[=:]\s*\S+")
        .expect("static redaction pattern is valid")
        .replace_all(message, "${1}=***")
        .to_string();

    if sanitized.len() > 500 {
        let suffix = "...[truncated]";
        let mut cut = 500 - suffix.len();
        // Never slice inside a multibyte character
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized = format!("{}{}", &sanitized[..cut], suffix);
    }

    sanitized
}

/// Result type for assignment operations
pub type AssignmentResult<T> = Result<T, AssignmentError>;
