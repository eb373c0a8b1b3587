//! Run-queue core shared by every policy.
//!
//! Owns the running slot, the ready queue (arrived and not-yet-arrived
//! processes, in insertion order), the completed list and the policy's
//! local clock. Policies differ only in how they *settle* the queue at an
//! instant: which rules pick the next process and whether a running
//! process may be displaced.
//!
//! # Advance
//!
//! `advance(delta, global_clock)` covers `[end - delta, end)`:
//! 1. settle at `start` (promote arrivals, preempt, dispatch if idle)
//! 2. tick the running process by `delta`, finish it at `end` if done
//! 3. settle at `end`

use std::cmp::Ordering;

use log::{debug, trace};

use super::rules::{compare_sequential, SelectionOrder};
use super::PolicySnapshot;
use crate::error::{Result, SimulationError};
use crate::models::{Process, ProcessStatus};

#[derive(Debug, Clone)]
pub(crate) struct RunQueue {
    label: &'static str,
    running: Option<Process>,
    ready: Vec<Process>,
    completed: Vec<Process>,
    clock: i64,
}

impl RunQueue {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            running: None,
            ready: Vec::new(),
            completed: Vec::new(),
            clock: 0,
        }
    }

    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    pub(crate) fn running(&self) -> Option<&Process> {
        self.running.as_ref()
    }

    pub(crate) fn ready(&self) -> &[Process] {
        &self.ready
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    /// Whether every known process has completed.
    pub(crate) fn is_drained(&self) -> bool {
        self.running.is_none() && self.ready.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.ready.len() + self.completed.len() + usize::from(self.running.is_some())
    }

    /// Running, then ready, then completed.
    pub(crate) fn processes(&self) -> impl Iterator<Item = &Process> {
        self.running
            .iter()
            .chain(self.ready.iter())
            .chain(self.completed.iter())
    }

    pub(crate) fn clear(&mut self) {
        self.running = None;
        self.ready.clear();
        self.completed.clear();
        self.clock = 0;
    }

    /// Accepts a process at any time.
    ///
    /// Completed processes go straight to the completed list; a process
    /// handed over while Running re-enters as Ready. Only preemptive
    /// policies may call this with a Running process.
    pub(crate) fn push(&mut self, mut process: Process) -> Result<()> {
        match process.status() {
            ProcessStatus::Completed => {
                self.completed.push(process);
                return Ok(());
            }
            ProcessStatus::Running => process.preempt()?,
            ProcessStatus::Waiting => {
                process.mark_ready(self.clock)?;
            }
            ProcessStatus::Ready => {}
        }
        trace!(
            "{}: queued {} (arrival={}, burst={})",
            self.label,
            process.name(),
            process.arrival_time(),
            process.burst_time()
        );
        self.ready.push(process);
        Ok(())
    }

    /// [`push`](Self::push) for policies without a Running → Ready edge.
    pub(crate) fn push_non_preemptive(&mut self, process: Process) -> Result<()> {
        if process.is_running() {
            return Err(SimulationError::InvalidTransition {
                process_id: process.id(),
                status: process.status(),
                operation: "requeue",
            });
        }
        self.push(process)
    }

    /// Runs one interval, settling the queue at both boundaries.
    pub(crate) fn advance<F>(&mut self, delta: i64, global_clock: Option<i64>, settle: F) -> Result<()>
    where
        F: Fn(&mut RunQueue, i64) -> Result<()>,
    {
        if delta <= 0 {
            return Err(SimulationError::InvalidDelta(delta));
        }
        let end = global_clock.unwrap_or(self.clock + delta);
        if end < self.clock {
            return Err(SimulationError::ClockRegression {
                current: self.clock,
                requested: end,
            });
        }
        let start = end - delta;

        settle(self, start)?;
        self.run(delta, end)?;
        settle(self, end)
    }

    /// Waiting → Ready for every process arrived by `now`.
    pub(crate) fn promote_arrivals(&mut self, now: i64) -> Result<()> {
        for process in self.ready.iter_mut().filter(|p| p.is_waiting()) {
            if process.mark_ready(now)? {
                trace!("{}: {} arrived at {}", self.label, process.name(), now);
            }
        }
        Ok(())
    }

    /// Index of the best dispatch candidate among arrived Ready processes.
    ///
    /// Full ties resolve to the earliest queue position.
    pub(crate) fn best_candidate(&self, order: SelectionOrder, now: i64) -> Option<usize> {
        self.ready
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_ready() && p.has_arrived(now))
            .min_by(|(_, a), (_, b)| compare_sequential(order, a, b))
            .map(|(index, _)| index)
    }

    /// Moves `ready[index]` onto the CPU. The CPU must be free.
    pub(crate) fn dispatch(&mut self, index: usize, now: i64) -> Result<()> {
        if let Some(current) = &self.running {
            return Err(SimulationError::InvalidTransition {
                process_id: current.id(),
                status: current.status(),
                operation: "displace",
            });
        }
        let mut process = self.ready.remove(index);
        process.dispatch(now)?;
        debug!(
            "{}: dispatched {} at {} (remaining={})",
            self.label,
            process.name(),
            now,
            process.remaining_time()
        );
        self.running = Some(process);
        Ok(())
    }

    /// Dispatches the best candidate if any. Returns whether one was dispatched.
    pub(crate) fn dispatch_next(&mut self, order: SelectionOrder, now: i64) -> Result<bool> {
        match self.best_candidate(order, now) {
            Some(index) => {
                self.dispatch(index, now)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns the running process to the back of the ready queue.
    pub(crate) fn preempt_running(&mut self, now: i64) -> Result<()> {
        if let Some(mut process) = self.running.take() {
            process.preempt()?;
            debug!(
                "{}: preempted {} at {} (remaining={})",
                self.label,
                process.name(),
                now,
                process.remaining_time()
            );
            self.ready.push(process);
        }
        Ok(())
    }

    fn run(&mut self, delta: i64, end: i64) -> Result<()> {
        self.clock = end;

        let finished = match self.running.as_mut() {
            Some(process) => {
                process.tick(delta)?;
                process.remaining_time() == 0
            }
            None => false,
        };

        if finished {
            if let Some(mut process) = self.running.take() {
                process.finish(end)?;
                debug!(
                    "{}: completed {} at {} (waiting={:?}, turnaround={:?})",
                    self.label,
                    process.name(),
                    end,
                    process.waiting_time(),
                    process.turnaround_time()
                );
                self.completed.push(process);
            }
        }
        Ok(())
    }

    /// Owned view with the ready queue in dispatch order.
    pub(crate) fn snapshot(&self, order: SelectionOrder) -> PolicySnapshot {
        let mut ready = self.ready.clone();
        ready.sort_by(|a, b| match (a.is_ready(), b.is_ready()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_sequential(order, a, b),
        });
        PolicySnapshot {
            running: self.running.clone(),
            ready,
            completed: self.completed.clone(),
            clock: self.clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::rules::{Fifo, Spt};

    const FIFO: SelectionOrder = &[&Fifo];
    const SPT: SelectionOrder = &[&Spt, &Fifo];

    fn process(id: u64, arrival: i64, burst: i64) -> Process {
        Process::new(id, arrival, burst, 10).unwrap()
    }

    fn settle_fifo(queue: &mut RunQueue, now: i64) -> Result<()> {
        queue.promote_arrivals(now)?;
        if !queue.is_busy() {
            queue.dispatch_next(FIFO, now)?;
        }
        Ok(())
    }

    #[test]
    fn test_push_promotes_arrived() {
        let mut queue = RunQueue::new("test");
        queue.push(process(1, 0, 5)).unwrap();
        queue.push(process(2, 10, 5)).unwrap();
        assert!(queue.ready()[0].is_ready());
        assert!(queue.ready()[1].is_waiting());
    }

    #[test]
    fn test_non_preemptive_push_refuses_running() {
        let mut queue = RunQueue::new("test");
        let mut p = process(1, 0, 5);
        p.dispatch(0).unwrap();
        assert_eq!(
            queue.push_non_preemptive(p.clone()),
            Err(SimulationError::InvalidTransition {
                process_id: 1,
                status: ProcessStatus::Running,
                operation: "requeue",
            })
        );
        assert_eq!(queue.len(), 0);

        queue.push(p).unwrap();
        assert!(queue.ready()[0].is_ready());
    }

    #[test]
    fn test_best_candidate_skips_unarrived() {
        let mut queue = RunQueue::new("test");
        queue.push(process(1, 5, 1)).unwrap();
        queue.push(process(2, 0, 9)).unwrap();
        assert_eq!(queue.best_candidate(SPT, 0), Some(1));
        queue.promote_arrivals(5).unwrap();
        assert_eq!(queue.best_candidate(SPT, 5), Some(0));
    }

    #[test]
    fn test_best_candidate_full_tie_keeps_queue_order() {
        let mut queue = RunQueue::new("test");
        queue.push(process(7, 0, 4)).unwrap();
        queue.push(process(3, 0, 4)).unwrap();
        assert_eq!(queue.best_candidate(SPT, 0), Some(0));
    }

    #[test]
    fn test_dispatch_refuses_to_displace() {
        let mut queue = RunQueue::new("test");
        queue.push(process(1, 0, 5)).unwrap();
        queue.push(process(2, 0, 5)).unwrap();
        queue.dispatch(0, 0).unwrap();
        let err = queue.dispatch(0, 0).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidTransition {
                operation: "displace",
                ..
            }
        ));
        assert_eq!(queue.running().unwrap().id(), 1);
        assert_eq!(queue.ready().len(), 1);
    }

    #[test]
    fn test_advance_runs_and_completes() {
        let mut queue = RunQueue::new("test");
        queue.push(process(1, 0, 2)).unwrap();
        queue.push(process(2, 0, 1)).unwrap();

        queue.advance(1, None, settle_fifo).unwrap();
        assert_eq!(queue.clock(), 1);
        assert_eq!(queue.running().unwrap().remaining_time(), 1);

        queue.advance(1, None, settle_fifo).unwrap();
        // P1 done at 2, P2 dispatched at 2
        assert_eq!(queue.running().unwrap().id(), 2);
        assert_eq!(queue.running().unwrap().start_time(), Some(2));

        queue.advance(1, None, settle_fifo).unwrap();
        assert!(queue.is_drained());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_advance_rejects_bad_input() {
        let mut queue = RunQueue::new("test");
        assert_eq!(
            queue.advance(0, None, settle_fifo),
            Err(SimulationError::InvalidDelta(0))
        );
        queue.advance(5, Some(5), settle_fifo).unwrap();
        assert_eq!(
            queue.advance(1, Some(4), settle_fifo),
            Err(SimulationError::ClockRegression {
                current: 5,
                requested: 4
            })
        );
    }

    #[test]
    fn test_preempt_running_requeues_at_back() {
        let mut queue = RunQueue::new("test");
        queue.push(process(1, 0, 5)).unwrap();
        queue.push(process(2, 0, 5)).unwrap();
        queue.dispatch(0, 0).unwrap();
        queue.preempt_running(1).unwrap();
        assert!(!queue.is_busy());
        assert_eq!(queue.ready()[1].id(), 1);
        assert!(queue.ready()[1].is_ready());
    }

    #[test]
    fn test_snapshot_orders_ready_by_rules() {
        let mut queue = RunQueue::new("test");
        queue.push(process(1, 0, 9)).unwrap();
        queue.push(process(2, 50, 1)).unwrap();
        queue.push(process(3, 0, 2)).unwrap();
        let snapshot = queue.snapshot(SPT);
        let ids: Vec<u64> = snapshot.ready.iter().map(|p| p.id()).collect();
        // arrived first (by SPT), not-yet-arrived last
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_push_completed_goes_to_completed() {
        let mut done = process(1, 0, 1);
        done.dispatch(0).unwrap();
        done.tick(1).unwrap();
        done.finish(1).unwrap();

        let mut queue = RunQueue::new("test");
        queue.push(done).unwrap();
        assert!(queue.is_drained());
        assert_eq!(queue.len(), 1);
    }
}
