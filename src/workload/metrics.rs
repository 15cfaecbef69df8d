//! Per-agent workload metrics
//!
//! Derives active-case count, utilization, capacity headroom, and approval
//! rate for each agent from the full case snapshot. Terminal cases
//! (approved, rejected, closed) never count toward active load but do count
//! toward the approval rate denominator.

use crate::domain::{Agent, Case, CaseStatus};
use serde::{Deserialize, Serialize};

/// Default maximum concurrent active cases per agent
pub const DEFAULT_MAX_CAPACITY: u32 = 20;

/// Default utilization percentage for the Limited label
pub const DEFAULT_LIMITED_UTILIZATION_PCT: f64 = 80.0;

/// Tunable knobs for workload derivation and availability labeling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadPolicy {
    pub max_capacity: u32,
    pub limited_utilization_pct: f64,
}

impl Default for WorkloadPolicy {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            limited_utilization_pct: DEFAULT_LIMITED_UTILIZATION_PCT,
        }
    }
}

/// Derived workload metrics for one agent
///
/// Ephemeral: recomputed on every evaluation from the case snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentMetrics {
    /// Non-terminal cases currently assigned to the agent
    pub active_cases: u32,
    pub max_capacity: u32,
    /// `active / capacity * 100`; unclamped, exceeds 100 when over-assigned
    pub utilization_rate: f64,
    /// `capacity - active`; negative when over-assigned
    pub available_capacity: i64,
    /// Rounded percentage of ever-assigned cases that reached approval
    pub approval_rate: u32,
    /// Cases ever assigned to the agent, any status
    pub total_cases: u32,
}

impl AgentMetrics {
    /// Compute metrics for one agent from the full case snapshot
    pub fn for_agent(agent_id: &str, cases: &[Case], policy: &WorkloadPolicy) -> Self {
        let assigned: Vec<&Case> = cases.iter().filter(|c| c.is_assigned_to(agent_id)).collect();

        let active_cases = assigned.iter().filter(|c| c.is_active()).count() as u32;
        let approved = assigned
            .iter()
            .filter(|c| c.status == CaseStatus::Approved)
            .count() as u32;
        let total_cases = assigned.len() as u32;

        let approval_rate = if total_cases == 0 {
            0
        } else {
            (f64::from(approved) / f64::from(total_cases) * 100.0).round() as u32
        };

        Self {
            active_cases,
            max_capacity: policy.max_capacity,
            utilization_rate: f64::from(active_cases) / f64::from(policy.max_capacity) * 100.0,
            available_capacity: i64::from(policy.max_capacity) - i64::from(active_cases),
            approval_rate,
            total_cases,
        }
    }

    /// An agent with no remaining headroom must not receive new cases
    pub fn is_available(&self) -> bool {
        self.available_capacity > 0
    }
}

/// An agent paired with its derived metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentWorkload {
    pub agent: Agent,
    pub metrics: AgentMetrics,
}

/// Compute workload metrics for every agent in the roster
///
/// Pure and side-effect-free: an empty case list yields zero metrics for
/// every agent, an empty roster yields an empty result.
pub fn compute_workload(
    agents: &[Agent],
    cases: &[Case],
    policy: &WorkloadPolicy,
) -> Vec<AgentWorkload> {
    agents
        .iter()
        .map(|agent| AgentWorkload {
            agent: agent.clone(),
            metrics: AgentMetrics::for_agent(&agent.id, cases, policy),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{make_agent, make_case, make_case_for};

    #[test]
    fn test_empty_inputs() {
        let policy = WorkloadPolicy::default();
        assert!(compute_workload(&[], &[], &policy).is_empty());

        let agents = vec![make_agent("a-1", "Asha")];
        let workloads = compute_workload(&agents, &[], &policy);
        assert_eq!(workloads.len(), 1);

        let metrics = &workloads[0].metrics;
        assert_eq!(metrics.active_cases, 0);
        assert_eq!(metrics.available_capacity, 20);
        assert_eq!(metrics.utilization_rate, 0.0);
        assert_eq!(metrics.approval_rate, 0);
        assert_eq!(metrics.total_cases, 0);
        assert!(metrics.is_available());
    }

    #[test]
    fn test_terminal_cases_excluded_from_active() {
        let policy = WorkloadPolicy::default();
        let cases = vec![
            make_case_for("c-1", CaseStatus::Processing, "a-1"),
            make_case_for("c-2", CaseStatus::Approved, "a-1"),
            make_case_for("c-3", CaseStatus::Rejected, "a-1"),
            make_case_for("c-4", CaseStatus::Closed, "a-1"),
            make_case_for("c-5", CaseStatus::UnderReview, "a-1"),
        ];

        let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
        assert_eq!(metrics.active_cases, 2);
        assert_eq!(metrics.total_cases, 5);
        assert_eq!(metrics.available_capacity, 18);
    }

    #[test]
    fn test_unassigned_and_other_agent_cases_ignored() {
        let policy = WorkloadPolicy::default();
        let cases = vec![
            make_case("c-1", CaseStatus::Submitted, None),
            make_case_for("c-2", CaseStatus::Processing, "a-2"),
        ];

        let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
        assert_eq!(metrics.active_cases, 0);
        assert_eq!(metrics.total_cases, 0);
    }

    #[test]
    fn test_utilization_unclamped_when_over_assigned() {
        let policy = WorkloadPolicy {
            max_capacity: 4,
            ..WorkloadPolicy::default()
        };
        let cases: Vec<_> = (0..5)
            .map(|i| make_case_for(&format!("c-{i}"), CaseStatus::Processing, "a-1"))
            .collect();

        let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
        assert_eq!(metrics.active_cases, 5);
        assert_eq!(metrics.utilization_rate, 125.0);
        assert_eq!(metrics.available_capacity, -1);
        assert!(!metrics.is_available());
    }

    #[test]
    fn test_exactly_at_capacity_is_unavailable() {
        let policy = WorkloadPolicy {
            max_capacity: 3,
            ..WorkloadPolicy::default()
        };
        let cases: Vec<_> = (0..3)
            .map(|i| make_case_for(&format!("c-{i}"), CaseStatus::UnderReview, "a-1"))
            .collect();

        let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
        assert_eq!(metrics.available_capacity, 0);
        assert!(!metrics.is_available());
    }

    #[test]
    fn test_approval_rate_rounded() {
        let policy = WorkloadPolicy::default();
        // 1 approved of 3 assigned: 33.33 rounds to 33
        let cases = vec![
            make_case_for("c-1", CaseStatus::Approved, "a-1"),
            make_case_for("c-2", CaseStatus::Rejected, "a-1"),
            make_case_for("c-3", CaseStatus::Processing, "a-1"),
        ];
        let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
        assert_eq!(metrics.approval_rate, 33);

        // 2 approved of 3 assigned: 66.67 rounds to 67
        let cases = vec![
            make_case_for("c-1", CaseStatus::Approved, "a-1"),
            make_case_for("c-2", CaseStatus::Approved, "a-1"),
            make_case_for("c-3", CaseStatus::Rejected, "a-1"),
        ];
        let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
        assert_eq!(metrics.approval_rate, 67);
    }

    #[test]
    fn test_capacity_arithmetic_invariant() {
        let policy = WorkloadPolicy::default();
        for active in [0u32, 1, 10, 19, 20, 25] {
            let cases: Vec<_> = (0..active)
                .map(|i| make_case_for(&format!("c-{i}"), CaseStatus::Processing, "a-1"))
                .collect();
            let metrics = AgentMetrics::for_agent("a-1", &cases, &policy);
            assert_eq!(
                metrics.available_capacity + i64::from(metrics.active_cases),
                i64::from(metrics.max_capacity)
            );
        }
    }

    #[test]
    fn test_recompute_is_deterministic() {
        let policy = WorkloadPolicy::default();
        let agents = vec![make_agent("a-1", "Asha"), make_agent("a-2", "Bram")];
        let cases = vec![
            make_case_for("c-1", CaseStatus::Processing, "a-1"),
            make_case_for("c-2", CaseStatus::Approved, "a-2"),
        ];

        let first = compute_workload(&agents, &cases, &policy);
        let second = compute_workload(&agents, &cases, &policy);
        assert_eq!(first, second);
    }
}
