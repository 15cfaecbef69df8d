//! Case backend collaborator
//!
//! The portal REST API owns agents, cases, and all lifecycle transitions.
//! This module provides the collaborator abstraction (for dependency
//! injection and testing) and its HTTP implementation.

use crate::domain::{Agent, Case, TransferRequest};
use crate::session::Session;
use thiserror::Error;

pub mod http;

pub use http::{HttpBackendConfig, HttpCaseBackend};

/// Errors crossing the backend I/O boundary
///
/// Surfaced to the caller unmodified; the engine never retries.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend answered with a non-success status
    #[error("status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its payload failed schema validation
    #[error("invalid response payload: {0}")]
    InvalidResponse(String),
}

/// Collaborator trait for the portal case backend
///
/// Reads return full snapshots; the engine performs all workload filtering
/// itself. Writes are single-attempt commands.
#[async_trait::async_trait]
pub trait CaseBackend: Send + Sync {
    /// Fetch the roster of case-handling agents
    async fn fetch_agents(&self, session: &Session) -> Result<Vec<Agent>, BackendError>;

    /// Fetch the full case collection, unfiltered
    async fn fetch_cases(&self, session: &Session) -> Result<Vec<Case>, BackendError>;

    /// Assign an unassigned case to an agent
    async fn assign_case(
        &self,
        session: &Session,
        case_id: &str,
        agent_id: &str,
    ) -> Result<(), BackendError>;

    /// Reassign an already-assigned case per the transfer request
    async fn transfer_case(
        &self,
        session: &Session,
        request: &TransferRequest,
    ) -> Result<(), BackendError>;
}
