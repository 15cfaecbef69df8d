//! Workload derivation and agent ranking
//!
//! Everything in this module is a pure function of the `(agents, cases)`
//! snapshot supplied by the caller. Metrics are recomputed on every
//! evaluation and never persisted; the snapshot entities are never mutated.

pub mod availability;
pub mod metrics;
pub mod ranking;

pub use availability::Availability;
pub use metrics::{compute_workload, AgentMetrics, AgentWorkload, WorkloadPolicy};
pub use ranking::rank_agents;
