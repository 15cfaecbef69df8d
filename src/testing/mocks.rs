//! Mock case backend for testing
//!
//! Records every write command so tests can assert not only what was
//! dispatched, but that pre-flight failures dispatched nothing at all.

use crate::backend::{BackendError, CaseBackend};
use crate::domain::{Agent, Case, TransferRequest};
use crate::session::Session;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Recorded assign command: (case id, agent id)
pub type RecordedAssignment = (String, String);

/// Mock backend serving canned snapshots and recording writes
#[derive(Debug, Default)]
pub struct MockCaseBackend {
    pub agents: Vec<Agent>,
    pub cases: Vec<Case>,
    pub recorded_assignments: Arc<Mutex<Vec<RecordedAssignment>>>,
    pub recorded_transfers: Arc<Mutex<Vec<TransferRequest>>>,
    pub fail_writes: bool,
    pub fail_reads: bool,
}

impl MockCaseBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(agents: Vec<Agent>, cases: Vec<Case>) -> Self {
        Self {
            agents,
            cases,
            ..Default::default()
        }
    }

    /// Every write call fails with a canned backend rejection
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Every read call fails with a canned backend rejection
    pub fn with_failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub async fn recorded_assignments(&self) -> Vec<RecordedAssignment> {
        self.recorded_assignments.lock().await.clone()
    }

    pub async fn recorded_transfers(&self) -> Vec<TransferRequest> {
        self.recorded_transfers.lock().await.clone()
    }

    /// Total write commands dispatched to this backend
    pub async fn write_count(&self) -> usize {
        self.recorded_assignments.lock().await.len() + self.recorded_transfers.lock().await.len()
    }

    fn rejection() -> BackendError {
        BackendError::Rejected {
            status: 409,
            message: "mock backend rejection".to_string(),
        }
    }
}

#[async_trait]
impl CaseBackend for MockCaseBackend {
    async fn fetch_agents(&self, _session: &Session) -> Result<Vec<Agent>, BackendError> {
        if self.fail_reads {
            return Err(Self::rejection());
        }
        Ok(self.agents.clone())
    }

    async fn fetch_cases(&self, _session: &Session) -> Result<Vec<Case>, BackendError> {
        if self.fail_reads {
            return Err(Self::rejection());
        }
        Ok(self.cases.clone())
    }

    async fn assign_case(
        &self,
        _session: &Session,
        case_id: &str,
        agent_id: &str,
    ) -> Result<(), BackendError> {
        if self.fail_writes {
            return Err(Self::rejection());
        }
        self.recorded_assignments
            .lock()
            .await
            .push((case_id.to_string(), agent_id.to_string()));
        Ok(())
    }

    async fn transfer_case(
        &self,
        _session: &Session,
        request: &TransferRequest,
    ) -> Result<(), BackendError> {
        if self.fail_writes {
            return Err(Self::rejection());
        }
        self.recorded_transfers.lock().await.push(request.clone());
        Ok(())
    }
}
