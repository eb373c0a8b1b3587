//! Shortest Job First (non-preemptive).
//!
//! Picks the arrived process with the smallest total burst, but only when
//! the CPU is free. A dispatched process keeps the CPU until it completes,
//! even if a strictly shorter job arrives meanwhile.

use super::queue::RunQueue;
use super::rules::{Fifo, SelectionOrder, Spt};
use super::{PolicyKind, PolicySnapshot, Scheduler};
use crate::error::Result;
use crate::metrics::AlgorithmMetrics;
use crate::models::Process;

const ORDER: SelectionOrder = &[&Spt, &Fifo];

/// Non-preemptive Shortest Job First scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    queue: RunQueue,
}

impl Sjf {
    pub fn new() -> Self {
        Self {
            queue: RunQueue::new("SJF"),
        }
    }

    fn settle(queue: &mut RunQueue, now: i64) -> Result<()> {
        queue.promote_arrivals(now)?;
        // Selection only ever fills a free slot.
        if !queue.is_busy() {
            queue.dispatch_next(ORDER, now)?;
        }
        Ok(())
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Sjf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sjf
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::models::ProcessStatus;
    use crate::policy::tests::{run_to_completion, textbook_processes};

    fn loaded(processes: Vec<Process>) -> Sjf {
        let mut sjf = Sjf::new();
        for p in processes {
            sjf.add_process(p).unwrap();
        }
        sjf
    }

    #[test]
    fn test_textbook_p1_runs_uninterrupted() {
        let mut sjf = loaded(textbook_processes());

        for t in 1..=8 {
            sjf.advance(1, Some(t)).unwrap();
            let snapshot = sjf.snapshot();
            if t < 8 {
                let running = snapshot.running.unwrap();
                assert_eq!(running.id(), 1, "t={t}");
                assert_eq!(running.start_time(), Some(0));
            }
        }

        // P1 done at 8; shortest of {P2(4), P3(9), P4(5)} is P2
        let snapshot = sjf.snapshot();
        assert_eq!(snapshot.completion_order(), vec![1]);
        assert_eq!(snapshot.completed[0].end_time(), Some(8));
        let next = snapshot.running.unwrap();
        assert_eq!(next.id(), 2);
        assert_eq!(next.start_time(), Some(8));
    }

    #[test]
    fn test_textbook_schedule() {
        let mut sjf = loaded(textbook_processes());
        run_to_completion(&mut sjf, 100);

        let snapshot = sjf.snapshot();
        assert_eq!(snapshot.completion_order(), vec![1, 2, 4, 3]);
        // waits: P1 0, P2 8-1=7, P4 12-3=9, P3 17-2=15
        let m = sjf.metrics(sjf.clock());
        assert!((m.average_waiting_time - 7.75).abs() < 1e-10);
    }

    #[test]
    fn test_shorter_arrival_never_displaces_running() {
        let mut sjf = loaded(vec![Process::new(1, 0, 6, 10).unwrap()]);
        sjf.advance(1, Some(1)).unwrap();

        for (offset, t) in (2..=6).enumerate() {
            sjf.add_process(Process::new(10 + offset as u64, t - 1, 1, 10).unwrap())
                .unwrap();
            sjf.advance(1, Some(t)).unwrap();
            let snapshot = sjf.snapshot();
            if t < 6 {
                assert_eq!(snapshot.running.as_ref().unwrap().id(), 1);
            }
            assert!(snapshot
                .ready
                .iter()
                .all(|p| p.id() != 1 && p.status() != ProcessStatus::Running));
        }
        assert_eq!(sjf.snapshot().completion_order()[0], 1);
    }

    #[test]
    fn test_running_input_rejected() {
        let mut handed_over = Process::new(5, 0, 3, 10).unwrap();
        handed_over.dispatch(0).unwrap();

        let mut sjf = Sjf::new();
        assert!(matches!(
            sjf.add_process(handed_over),
            Err(SimulationError::InvalidTransition { process_id: 5, .. })
        ));
        assert_eq!(sjf.process_count(), 0);
    }

    #[test]
    fn test_burst_ties_broken_by_arrival() {
        let mut sjf = loaded(vec![
            Process::new(1, 0, 5, 10).unwrap(),
            Process::new(2, 2, 3, 10).unwrap(),
            Process::new(3, 1, 3, 10).unwrap(),
        ]);
        run_to_completion(&mut sjf, 100);
        assert_eq!(sjf.snapshot().completion_order(), vec![1, 3, 2]);
    }

    #[test]
    fn test_unarrived_short_job_not_selected() {
        let mut sjf = loaded(vec![
            Process::new(1, 0, 4, 10).unwrap(),
            Process::new(2, 3, 1, 10).unwrap(),
        ]);
        sjf.advance(1, Some(1)).unwrap();
        assert_eq!(sjf.snapshot().running.unwrap().id(), 1);
    }
}
