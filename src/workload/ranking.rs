//! Agent ranking for assignment suggestions
//!
//! Total-orders the roster so the best assignment target comes first:
//! 1. Available agents before unavailable ones, always.
//! 2. More capacity headroom first (primary load-balancing signal).
//! 3. Higher approval rate first (quality signal, consulted only on equal load).
//! 4. Remaining ties keep their input order (the sort is stable).
//!
//! Deterministic: no randomness, no time-dependence beyond the snapshot.

use crate::workload::AgentWorkload;
use std::cmp::Ordering;

/// Sort candidates in place, best assignment target first
pub fn rank_agents(workloads: &mut [AgentWorkload]) {
    // sort_by is stable, which rule 4 depends on
    workloads.sort_by(compare_candidates);
}

fn compare_candidates(a: &AgentWorkload, b: &AgentWorkload) -> Ordering {
    // Availability is a hard gate: an agent at or over capacity never ranks
    // ahead of one with room, whatever its other metrics say.
    b.metrics
        .is_available()
        .cmp(&a.metrics.is_available())
        .then_with(|| {
            b.metrics
                .available_capacity
                .cmp(&a.metrics.available_capacity)
        })
        .then_with(|| b.metrics.approval_rate.cmp(&a.metrics.approval_rate))
}
