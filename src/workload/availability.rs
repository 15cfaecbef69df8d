//! Availability classification
//!
//! Maps an agent's utilization into the tri-state label shown next to each
//! candidate in the assignment picker.

use crate::workload::{AgentMetrics, WorkloadPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tri-state availability label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// No remaining capacity; must never be suggested for new work
    Unavailable,
    /// Has capacity but utilization is at or above the limited threshold
    Limited,
    Available,
}

impl Availability {
    /// Classify an agent's metrics
    ///
    /// Total: every metrics value maps to exactly one label.
    pub fn classify(metrics: &AgentMetrics, policy: &WorkloadPolicy) -> Self {
        if !metrics.is_available() {
            Availability::Unavailable
        } else if metrics.utilization_rate >= policy.limited_utilization_pct {
            Availability::Limited
        } else {
            Availability::Available
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::Unavailable => "unavailable",
            Availability::Limited => "limited",
            Availability::Available => "available",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
