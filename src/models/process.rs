//! Process (unit of CPU work) model.
//!
//! A process carries immutable timing inputs (arrival, burst, size) and a
//! mutable run state driven by the owning scheduling policy.
//!
//! # Lifecycle
//!
//! ```text
//! Waiting ──mark_ready──▶ Ready ──dispatch──▶ Running ──finish──▶ Completed
//!    │                      ▲                    │
//!    └──────dispatch────────┼────────────────────┘ (preempt, preemptive only)
//! ```
//!
//! Every operation invoked from a state that forbids it returns
//! [`SimulationError::InvalidTransition`].

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::validation::validate_process;

/// Run state of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    /// Created, not yet arrived.
    Waiting,
    /// Arrived and eligible for dispatch.
    Ready,
    /// Currently holds the CPU.
    Running,
    /// Finished; never mutated again.
    Completed,
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProcessStatus::Waiting => "waiting",
            ProcessStatus::Ready => "ready",
            ProcessStatus::Running => "running",
            ProcessStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A simulated process.
///
/// # Time Representation
/// All times are simulated milliseconds relative to the start of the run (t=0).
/// `Clone` is a deep copy, so the same logical process can be handed to
/// several policies without shared mutation. Only serialized, never
/// deserialized: every instance goes through [`Process::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Process {
    id: u64,
    name: String,
    arrival_time: i64,
    burst_time: i64,
    size: i64,
    status: ProcessStatus,
    remaining_time: i64,
    start_time: Option<i64>,
    end_time: Option<i64>,
    waiting_time: Option<i64>,
    turnaround_time: Option<i64>,
}

impl Process {
    /// Creates a Waiting process named `P{id}`.
    ///
    /// # Errors
    /// [`SimulationError::Validation`] if `burst_time <= 0`, `size <= 0` or
    /// `arrival_time < 0`.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::models::{Process, ProcessStatus};
    ///
    /// let p = Process::new(1, 0, 8, 32).unwrap();
    /// assert_eq!(p.name(), "P1");
    /// assert_eq!(p.status(), ProcessStatus::Waiting);
    /// assert_eq!(p.remaining_time(), 8);
    ///
    /// assert!(Process::new(2, 0, 0, 32).is_err());
    /// ```
    pub fn new(id: u64, arrival_time: i64, burst_time: i64, size: i64) -> Result<Self> {
        validate_process(arrival_time, burst_time, size).map_err(SimulationError::Validation)?;
        Ok(Self {
            id,
            name: format!("P{id}"),
            arrival_time,
            burst_time,
            size,
            status: ProcessStatus::Waiting,
            remaining_time: burst_time,
            start_time: None,
            end_time: None,
            waiting_time: None,
            turnaround_time: None,
        })
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> i64 {
        self.arrival_time
    }

    pub fn burst_time(&self) -> i64 {
        self.burst_time
    }

    /// Memory footprint. Descriptive only; no policy reads it.
    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Time of the first dispatch.
    pub fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    /// Completion time.
    pub fn end_time(&self) -> Option<i64> {
        self.end_time
    }

    /// `max(0, turnaround - burst)`, set on completion.
    pub fn waiting_time(&self) -> Option<i64> {
        self.waiting_time
    }

    /// `max(0, end - arrival)`, set on completion.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.turnaround_time
    }

    /// Whether the process has arrived by `now`.
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    pub fn is_waiting(&self) -> bool {
        self.status == ProcessStatus::Waiting
    }

    pub fn is_ready(&self) -> bool {
        self.status == ProcessStatus::Ready
    }

    pub fn is_running(&self) -> bool {
        self.status == ProcessStatus::Running
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProcessStatus::Completed
    }

    /// Percentage of the burst already executed (0.0..=100.0).
    pub fn progress(&self) -> f64 {
        let done = self.burst_time - self.remaining_time;
        done as f64 / self.burst_time as f64 * 100.0
    }

    fn transition_error(&self, operation: &'static str) -> SimulationError {
        SimulationError::InvalidTransition {
            process_id: self.id,
            status: self.status,
            operation,
        }
    }

    /// Waiting → Ready once the process has arrived.
    ///
    /// Returns `Ok(false)` (no change) if `arrival_time > now`.
    pub fn mark_ready(&mut self, now: i64) -> Result<bool> {
        if self.status != ProcessStatus::Waiting {
            return Err(self.transition_error("mark ready"));
        }
        if !self.has_arrived(now) {
            return Ok(false);
        }
        self.status = ProcessStatus::Ready;
        Ok(true)
    }

    /// Ready/Waiting → Running. Records `start_time` on the first dispatch only.
    pub fn dispatch(&mut self, now: i64) -> Result<()> {
        match self.status {
            ProcessStatus::Ready | ProcessStatus::Waiting => {
                self.status = ProcessStatus::Running;
                if self.start_time.is_none() {
                    self.start_time = Some(now);
                }
                Ok(())
            }
            _ => Err(self.transition_error("dispatch")),
        }
    }

    /// Consumes `delta` of CPU time, floored at zero. Status is unchanged.
    ///
    /// # Errors
    /// [`SimulationError::InvalidDelta`] for `delta < 0`; remaining time
    /// never grows.
    pub fn tick(&mut self, delta: i64) -> Result<()> {
        if self.status != ProcessStatus::Running {
            return Err(self.transition_error("tick"));
        }
        if delta < 0 {
            return Err(SimulationError::InvalidDelta(delta));
        }
        self.remaining_time = (self.remaining_time - delta).max(0);
        Ok(())
    }

    /// Running → Completed. Requires `remaining_time == 0`.
    pub fn finish(&mut self, now: i64) -> Result<()> {
        if self.status != ProcessStatus::Running || self.remaining_time != 0 {
            return Err(self.transition_error("finish"));
        }
        let turnaround = (now - self.arrival_time).max(0);
        self.status = ProcessStatus::Completed;
        self.end_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some((turnaround - self.burst_time).max(0));
        Ok(())
    }

    /// Running → Ready. Progress and `start_time` are kept.
    pub fn preempt(&mut self) -> Result<()> {
        if self.status != ProcessStatus::Running {
            return Err(self.transition_error("preempt"));
        }
        self.status = ProcessStatus::Ready;
        Ok(())
    }
}
