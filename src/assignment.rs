//! Assignment and transfer actions
//!
//! Validates a chosen target against the latest workload snapshot, then
//! dispatches a single command to the case backend. The engine holds no
//! state of its own: on success the caller must re-evaluate the snapshot to
//! observe the new assignment.
//!
//! Two confirmations racing for an agent's last slot may both pass the local
//! availability gate against their own snapshots; the backend is the sole
//! arbiter of that race and its rejection surfaces as a backend error.

use crate::backend::CaseBackend;
use crate::domain::{Agent, Case, TransferRequest};
use crate::error::{AssignmentError, AssignmentResult};
use crate::session::Session;
use crate::workload::{compute_workload, rank_agents, AgentWorkload, Availability, WorkloadPolicy};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Ranked workload snapshot taken at one evaluation
///
/// Carries the case collection alongside the ranked roster so transfer
/// validation can see current assignees without another fetch.
#[derive(Debug, Clone)]
pub struct WorkloadSnapshot {
    /// Roster with derived metrics, best assignment target first
    pub workloads: Vec<AgentWorkload>,
    pub cases: Vec<Case>,
    pub taken_at: DateTime<Utc>,
    policy: WorkloadPolicy,
}

impl WorkloadSnapshot {
    /// Build a ranked snapshot from already-fetched collections
    pub fn derive(agents: &[Agent], cases: Vec<Case>, policy: WorkloadPolicy) -> Self {
        let mut workloads = compute_workload(agents, &cases, &policy);
        rank_agents(&mut workloads);
        Self {
            workloads,
            cases,
            taken_at: Utc::now(),
            policy,
        }
    }

    pub fn find_agent(&self, agent_id: &str) -> Option<&AgentWorkload> {
        self.workloads.iter().find(|w| w.agent.id == agent_id)
    }

    pub fn find_case(&self, case_id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == case_id)
    }

    /// Availability label for one ranked candidate
    pub fn availability_of(&self, workload: &AgentWorkload) -> Availability {
        Availability::classify(&workload.metrics, &self.policy)
    }
}

/// Stateless assignment service over a case backend collaborator
pub struct AssignmentService<B: CaseBackend> {
    backend: B,
    policy: WorkloadPolicy,
}

impl<B: CaseBackend> AssignmentService<B> {
    pub fn new(backend: B, policy: WorkloadPolicy) -> Self {
        Self { backend, policy }
    }

    /// The underlying collaborator (tests inspect recorded commands here)
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch the roster and case collection, derive and rank workloads
    pub async fn evaluate(&self, session: &Session) -> AssignmentResult<WorkloadSnapshot> {
        self.ensure_session_live(session)?;

        let agents = self.backend.fetch_agents(session).await?;
        let cases = self.backend.fetch_cases(session).await?;
        debug!(
            agents = agents.len(),
            cases = cases.len(),
            "evaluating workload snapshot"
        );

        Ok(WorkloadSnapshot::derive(&agents, cases, self.policy))
    }

    /// Assign an unassigned case to the selected agent
    ///
    /// Pre-flight checks run against `snapshot` and block the network call:
    /// no selection, unknown agent, or a target without capacity all fail
    /// locally. On pass, exactly one assign command is issued; its outcome is
    /// surfaced unmodified.
    pub async fn assign(
        &self,
        session: &Session,
        case_id: &str,
        selected_agent: Option<&str>,
        snapshot: &WorkloadSnapshot,
    ) -> AssignmentResult<()> {
        self.ensure_session_live(session)?;

        let agent_id = selected_agent.ok_or(AssignmentError::NoAgentSelected)?;
        let workload = snapshot
            .find_agent(agent_id)
            .ok_or_else(|| AssignmentError::agent_not_found(agent_id))?;
        ensure_available(workload)?;

        self.backend.assign_case(session, case_id, agent_id).await?;
        info!(case_id, agent_id, "case assigned");
        Ok(())
    }

    /// Transfer an already-assigned case to a different agent
    ///
    /// In addition to the assignment gates, rejects a no-op transfer to the
    /// case's current agent. The candidate list shown to users already
    /// excludes the current agent, but the action guards it independently.
    pub async fn transfer(
        &self,
        session: &Session,
        request: &TransferRequest,
        snapshot: &WorkloadSnapshot,
    ) -> AssignmentResult<()> {
        self.ensure_session_live(session)?;

        let case = snapshot
            .find_case(&request.case_id)
            .ok_or_else(|| AssignmentError::case_not_found(&request.case_id))?;
        if case.is_assigned_to(&request.new_agent_id) {
            return Err(AssignmentError::SameAgentTransfer {
                agent_id: request.new_agent_id.clone(),
            });
        }

        let workload = snapshot
            .find_agent(&request.new_agent_id)
            .ok_or_else(|| AssignmentError::agent_not_found(&request.new_agent_id))?;
        ensure_available(workload)?;

        self.backend.transfer_case(session, request).await?;
        info!(
            case_id = %request.case_id,
            new_agent_id = %request.new_agent_id,
            reason = request.reason.as_str(),
            "case transferred"
        );
        Ok(())
    }

    fn ensure_session_live(&self, session: &Session) -> AssignmentResult<()> {
        if session.is_expired(Utc::now()) {
            return Err(AssignmentError::SessionExpired);
        }
        Ok(())
    }
}

fn ensure_available(workload: &AgentWorkload) -> AssignmentResult<()> {
    if !workload.metrics.is_available() {
        return Err(AssignmentError::at_capacity(
            &workload.agent.id,
            workload.metrics.active_cases,
            workload.metrics.max_capacity,
        ));
    }
    Ok(())
}
