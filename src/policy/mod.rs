//! CPU scheduling policies.
//!
//! Three leaf policies share one contract, [`Scheduler`]:
//!
//! | Policy | Preemptive | Selection order |
//! |--------|-----------|-----------------|
//! | `Fcfs` | no | arrival, queue position |
//! | `Sjf` | no | burst, arrival, queue position |
//! | `Srtf` | yes | remaining, arrival, queue position |
//!
//! Each policy owns its processes exclusively. The driver hands every policy
//! its own clone of a generated process, so policies compared side by side
//! never share mutable state.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::policy::{PolicyKind, Scheduler};
//!
//! let mut srtf = PolicyKind::Srtf.create();
//! srtf.add_process(Process::new(1, 0, 8, 10).unwrap()).unwrap();
//! srtf.advance(1, Some(1)).unwrap();
//! assert_eq!(srtf.snapshot().running.unwrap().remaining_time(), 7);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

mod fcfs;
mod queue;
pub mod rules;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::metrics::AlgorithmMetrics;
use crate::models::Process;

/// Identifies one of the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    Srtf,
}

impl PolicyKind {
    /// All policies, in comparison order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fcfs, PolicyKind::Sjf, PolicyKind::Srtf];

    /// Short name ("FCFS", "SJF", "SRTF").
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::Srtf => "SRTF",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "First-Come, First-Served (Non-preemptive)",
            PolicyKind::Sjf => "Shortest Job First (Non-preemptive)",
            PolicyKind::Srtf => "Shortest Remaining Time First (Preemptive)",
        }
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, PolicyKind::Srtf)
    }

    /// Creates a fresh, empty instance of this policy.
    pub fn create(&self) -> Box<dyn Scheduler> {
        match self {
            PolicyKind::Fcfs => Box::new(Fcfs::new()),
            PolicyKind::Sjf => Box::new(Sjf::new()),
            PolicyKind::Srtf => Box::new(Srtf::new()),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = SimulationError;

    /// Case-insensitive: "fcfs", "SJF", "Srtf".
    fn from_str(s: &str) -> Result<Self> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SimulationError::UnknownPolicy(s.to_string()))
    }
}

/// Owned view of a policy's state at its current clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySnapshot {
    /// Process holding the CPU, if any.
    pub running: Option<Process>,
    /// Queued processes in dispatch order; not-yet-arrived ones last.
    pub ready: Vec<Process>,
    /// Finished processes in completion order.
    pub completed: Vec<Process>,
    /// Policy clock (ms).
    pub clock: i64,
}

impl PolicySnapshot {
    /// Running, then ready, then completed.
    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.running
            .iter()
            .chain(self.ready.iter())
            .chain(self.completed.iter())
    }

    /// Ids of completed processes in completion order.
    pub fn completion_order(&self) -> Vec<u64> {
        self.completed.iter().map(|p| p.id()).collect()
    }
}

/// Common contract of every scheduling policy.
///
/// `advance` is the single state-transition step. Passing the driver's
/// clock as `global_clock` keeps independently instantiated policies in
/// lockstep; `None` advances the local clock by `delta`.
pub trait Scheduler: Send + Debug {
    /// Which built-in policy this is.
    fn kind(&self) -> PolicyKind;

    /// Policy name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Accepts a process at any time, including mid-simulation.
    ///
    /// # Errors
    /// Non-preemptive policies reject a process handed over while Running
    /// with [`SimulationError::InvalidTransition`]; only a preemptive policy
    /// may move it back to Ready.
    fn add_process(&mut self, process: Process) -> Result<()>;

    /// Advances the policy by `delta` ms, ending at `global_clock` when given.
    ///
    /// # Errors
    /// [`SimulationError::InvalidDelta`] for `delta <= 0`,
    /// [`SimulationError::ClockRegression`] if `global_clock` is behind the
    /// policy clock, [`SimulationError::InvalidTransition`] on a logic bug.
    fn advance(&mut self, delta: i64, global_clock: Option<i64>) -> Result<()>;

    /// Clears every queue and the local clock.
    fn reset(&mut self);

    /// Local clock (ms).
    fn clock(&self) -> i64;

    fn snapshot(&self) -> PolicySnapshot;

    /// Metrics over all of this policy's processes at `now`.
    fn metrics(&self, now: i64) -> AlgorithmMetrics;

    /// Number of processes known to the policy.
    fn process_count(&self) -> usize;

    /// Whether every known process has completed.
    fn is_drained(&self) -> bool;
}
