//! Driver status and the aggregated state object handed to presentation.

use serde::{Deserialize, Serialize};

use crate::metrics::AlgorithmMetrics;
use crate::models::SimulationConfig;
use crate::policy::{PolicyKind, PolicySnapshot};

/// Driver lifecycle.
///
/// ```text
/// Idle ──start──▶ Running ──pause──▶ Paused ──start──▶ Running
///                    │
///                    └── all work done / time limit ──▶ Completed
/// ```
/// `reset` returns to Idle from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

/// One policy's view in a [`SimulationState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReport {
    pub kind: PolicyKind,
    pub name: &'static str,
    pub snapshot: PolicySnapshot,
    pub metrics: AlgorithmMetrics,
}

/// Read-only aggregate of the whole simulation at the driver clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationState {
    pub status: SimulationStatus,
    /// Driver clock (ms).
    pub clock: i64,
    pub generated_count: usize,
    pub last_generation_time: i64,
    pub config: SimulationConfig,
    pub policies: Vec<PolicyReport>,
}

impl SimulationState {
    /// Report for one policy.
    pub fn policy(&self, kind: PolicyKind) -> Option<&PolicyReport> {
        self.policies.iter().find(|r| r.kind == kind)
    }
}
