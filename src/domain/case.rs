//! Case snapshot types
//!
//! Case lifecycle transitions are owned by the backend; the engine only
//! reads status to decide what counts toward an agent's active load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Case lifecycle status
///
/// Lifecycle (backend-owned):
/// `submitted → under_review → documents_required ⇄ processing → {approved | rejected} → closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Submitted,
    UnderReview,
    DocumentsRequired,
    Processing,
    Approved,
    Rejected,
    Closed,
}

impl CaseStatus {
    /// Terminal statuses do not count toward an agent's active load
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CaseStatus::Approved | CaseStatus::Rejected | CaseStatus::Closed
        )
    }
}

/// An immigration case, as reported by the case backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Backend identifier (opaque string)
    pub id: String,
    /// Human-facing reference code
    pub reference: String,
    pub status: CaseStatus,
    /// None means unassigned
    pub assigned_agent_id: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Whether this case currently counts toward its agent's workload
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn is_assigned_to(&self, agent_id: &str) -> bool {
        self.assigned_agent_id.as_deref() == Some(agent_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(CaseStatus::Approved.is_terminal());
        assert!(CaseStatus::Rejected.is_terminal());
        assert!(CaseStatus::Closed.is_terminal());

        assert!(!CaseStatus::Submitted.is_terminal());
        assert!(!CaseStatus::UnderReview.is_terminal());
        assert!(!CaseStatus::DocumentsRequired.is_terminal());
        assert!(!CaseStatus::Processing.is_terminal());
    }

    #[test]
    fn test_status_wire_format() {
        let status: CaseStatus = serde_json::from_str("\"documents_required\"").unwrap();
        assert_eq!(status, CaseStatus::DocumentsRequired);

        // Unknown statuses must be rejected at the boundary, not defaulted
        assert!(serde_json::from_str::<CaseStatus>("\"archived\"").is_err());
    }
}
