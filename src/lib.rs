//! caseroute - agent workload ranking and case assignment
//!
//! The assignment engine behind the case-management portal's "assign case"
//! and "transfer case" dialogs. It is a stateless derivation step between
//! two HTTP calls: fetch the agent roster and case collection, derive
//! per-agent workload metrics, rank candidates, and dispatch a single
//! assign or transfer command back to the backend.
//!
//! # Overview
//!
//! - Workload metrics (active load, utilization, headroom, approval rate)
//!   as a pure function of the `(agents, cases)` snapshot
//! - Tri-state availability classification with a hard capacity gate
//! - Deterministic, stable candidate ranking
//! - Pre-flight validation that blocks doomed commands before any network
//!   call, with a single-attempt dispatch to the backend collaborator
//!
//! # Quick Start
//!
//! ```rust
//! use caseroute::domain::{Agent, Case, CaseStatus, PortalRole};
//! use caseroute::workload::{compute_workload, rank_agents, WorkloadPolicy};
//! use chrono::Utc;
//!
//! let agents = vec![Agent {
//!     id: "a-1".to_string(),
//!     name: "Asha Rao".to_string(),
//!     email: "asha@example.com".to_string(),
//!     active: true,
//!     role: PortalRole::Agent,
//! }];
//! let cases = vec![Case {
//!     id: "c-1".to_string(),
//!     reference: "IMM-2026-0001".to_string(),
//!     status: CaseStatus::UnderReview,
//!     assigned_agent_id: Some("a-1".to_string()),
//!     submitted_at: Utc::now(),
//!     updated_at: Utc::now(),
//! }];
//!
//! let policy = WorkloadPolicy::default();
//! let mut workloads = compute_workload(&agents, &cases, &policy);
//! rank_agents(&mut workloads);
//!
//! assert_eq!(workloads[0].metrics.active_cases, 1);
//! assert_eq!(workloads[0].metrics.available_capacity, 19);
//! ```

pub mod assignment;
pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod session;
pub mod testing;
pub mod workload;

pub use assignment::{AssignmentService, WorkloadSnapshot};
pub use backend::{BackendError, CaseBackend, HttpCaseBackend};
pub use config::{ConfigError, PortalConfig};
pub use domain::{Agent, Case, CaseStatus, TransferReason, TransferRequest};
pub use error::{AssignmentError, AssignmentResult};
pub use session::Session;
pub use workload::{
    compute_workload, rank_agents, AgentMetrics, AgentWorkload, Availability, WorkloadPolicy,
};
