//! Shortest Remaining Time First (preemptive).
//!
//! At every settle point the arrived Ready process with the least remaining
//! time is compared against the running one. A strictly smaller remaining
//! time preempts immediately; an equal one never does. There is no cooldown
//! and no minimum difference: preemption happens exactly when a strictly
//! shorter job is available.

use super::queue::RunQueue;
use super::rules::{Fifo, SelectionOrder, Srpt};
use super::{PolicyKind, PolicySnapshot, Scheduler};
use crate::error::Result;
use crate::metrics::AlgorithmMetrics;
use crate::models::Process;

const ORDER: SelectionOrder = &[&Srpt, &Fifo];

/// Preemptive Shortest Remaining Time First scheduler.
#[derive(Debug, Clone)]
pub struct Srtf {
    queue: RunQueue,
}

impl Srtf {
    pub fn new() -> Self {
        Self {
            queue: RunQueue::new("SRTF"),
        }
    }

    fn settle(queue: &mut RunQueue, now: i64) -> Result<()> {
        queue.promote_arrivals(now)?;

        if let Some(running) = queue.running() {
            let challenger = queue
                .best_candidate(ORDER, now)
                .filter(|&i| queue.ready()[i].remaining_time() < running.remaining_time());
            if let Some(index) = challenger {
                // The preempted process is appended, so `index` stays valid.
                queue.preempt_running(now)?;
                queue.dispatch(index, now)?;
            }
        }

        if !queue.is_busy() {
            queue.dispatch_next(ORDER, now)?;
        }
        Ok(())
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Srtf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Srtf
    }

    fn add_process(&mut self, process: Process) -> Result<()> {
        self.queue.push(process)
    }

    fn advance(&mut self, delta: i64, global_clock: Option<i64>) -> Result<()> {
        self.queue.advance(delta, global_clock, Self::settle)
    }

    fn reset(&mut self) {
        self.queue.clear();
    }

    fn clock(&self) -> i64 {
        self.queue.clock()
    }

    fn snapshot(&self) -> PolicySnapshot {
        self.queue.snapshot(ORDER)
    }

    fn metrics(&self, now: i64) -> AlgorithmMetrics {
        AlgorithmMetrics::calculate(self.queue.processes(), now)
    }

    fn process_count(&self) -> usize {
        self.queue.len()
    }

    fn is_drained(&self) -> bool {
        self.queue.is_drained()
    }
}
