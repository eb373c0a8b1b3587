//! First-Come, First-Served.
//!
//! Non-preemptive, arrival order. Never starves a process, but a long
//! burst at the head of the queue delays everything behind it (convoy
//! effect).

use super::queue::RunQueue;
use super::rules::{Fifo, SelectionOrder};
use super::{PolicyKind, PolicySnapshot, Scheduler};
use crate::error::Result;
use crate::metrics::AlgorithmMetrics;
use crate::models::Process;

const ORDER: SelectionOrder = &[&Fifo];

/// First-Come, First-Served scheduler.
#[derive(Debug, Clone)]
pub struct Fcfs {
    queue: RunQueue,
}

impl Fcfs {
    pub fn new() -> Self {
        Self {
            queue: RunQueue::new("FCFS"),
        }
    }

    fn settle(queue: &mut RunQueue, now: i64) -> Result<()> {
        queue.promote_arrivals(now)?;
        if !queue.is_busy() {
            queue.dispatch_next(ORDER, now)?;
        }
        Ok(())
    }
}

impl Default for Fcfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn add_process(&mut self, process: Process) -> Result<()> {
        self.queue.push_non_preemptive(process)
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
