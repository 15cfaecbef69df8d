//! Transfer command types
//!
//! A transfer reassigns an already-assigned case to a different agent with a
//! reason code and notification options. The request is validated locally and
//! then forwarded verbatim to the backend collaborator.

use crate::error::AssignmentError;
use serde::{Deserialize, Serialize};

/// Enumerated reason for a case transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferReason {
    Reassignment,
    Coverage,
    Specialization,
    Workload,
    Other,
}

impl TransferReason {
    /// Parse a reason code from its wire/CLI form
    ///
    /// The reason set is closed; anything else fails with
    /// [`AssignmentError::InvalidReason`] before any network call.
    pub fn parse(value: &str) -> Result<Self, AssignmentError> {
        match value {
            "reassignment" => Ok(TransferReason::Reassignment),
            "coverage" => Ok(TransferReason::Coverage),
            "specialization" => Ok(TransferReason::Specialization),
            "workload" => Ok(TransferReason::Workload),
            "other" => Ok(TransferReason::Other),
            _ => Err(AssignmentError::InvalidReason {
                value: value.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransferReason::Reassignment => "reassignment",
            TransferReason::Coverage => "coverage",
            TransferReason::Specialization => "specialization",
            TransferReason::Workload => "workload",
            TransferReason::Other => "other",
        }
    }
}

/// Command to reassign a case to a different agent
///
/// Constructed by the caller, validated by the assignment service, then
/// forwarded to the backend unchanged. Never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub case_id: String,
    pub new_agent_id: String,
    pub reason: TransferReason,
    /// Free text for the receiving agent; no enforced format
    pub handover_notes: Option<String>,
    pub notify_client: bool,
    pub notify_agent: bool,
}

impl TransferRequest {
    pub fn new(
        case_id: impl Into<String>,
        new_agent_id: impl Into<String>,
        reason: TransferReason,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            new_agent_id: new_agent_id.into(),
            reason,
            handover_notes: None,
            notify_client: false,
            notify_agent: false,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.handover_notes = Some(notes.into());
        self
    }

    pub fn notifying(mut self, client: bool, agent: bool) -> Self {
        self.notify_client = client;
        self.notify_agent = agent;
        self
    }
}
