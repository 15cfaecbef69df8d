//! Snapshot fixtures for tests

use crate::domain::{Agent, Case, CaseStatus, PortalRole};
use chrono::{TimeZone, Utc};

/// Build an active case-handling agent
pub fn make_agent(id: &str, name: &str) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@portal.example.com"),
        active: true,
        role: PortalRole::Agent,
    }
}

/// Build a case with an explicit (possibly absent) assignee
pub fn make_case(id: &str, status: CaseStatus, assigned_agent_id: Option<&str>) -> Case {
    let submitted_at = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    Case {
        id: id.to_string(),
        reference: format!("IMM-2026-{id}"),
        status,
        assigned_agent_id: assigned_agent_id.map(str::to_string),
        submitted_at,
        updated_at: submitted_at,
    }
}

/// Build a case assigned to the given agent
pub fn make_case_for(id: &str, status: CaseStatus, agent_id: &str) -> Case {
    make_case(id, status, Some(agent_id))
}
