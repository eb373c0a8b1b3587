//! Per-policy performance metrics.
//!
//! Computes aggregate statistics from a policy's processes at a point in
//! simulated time. Recomputed on demand, never maintained incrementally.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) over completed |
//! | Avg Turnaround Time | mean(end - arrival) over completed |
//! | Throughput | completed / (now / 1000), processes per simulated second |
//! | CPU Utilization | Σ burst of completed / now × 100 |

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Policy performance indicators.
///
/// With zero completed processes every derived value is exactly `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    /// All processes known to the policy, finished or not.
    pub total_processes: usize,
    /// Processes in status Completed.
    pub completed_processes: usize,
    /// Mean waiting time of completed processes (ms).
    pub average_waiting_time: f64,
    /// Mean turnaround time of completed processes (ms).
    pub average_turnaround_time: f64,
    /// Completed processes per simulated second.
    pub throughput: f64,
    /// Percentage of elapsed time spent executing completed work.
    pub cpu_utilization: f64,
    /// Elapsed simulated time used for the computation (ms).
    pub total_execution_time: i64,
}

impl AlgorithmMetrics {
    /// Computes metrics over `processes` at simulated time `now`.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::metrics::AlgorithmMetrics;
    /// use u_cpusched::models::Process;
    ///
    /// let pending = vec![Process::new(1, 0, 5, 10).unwrap()];
    /// let metrics = AlgorithmMetrics::calculate(&pending, 100);
    /// assert_eq!(metrics.total_processes, 1);
    /// assert_eq!(metrics.throughput, 0.0);
    /// ```
    pub fn calculate<'a, I>(processes: I, now: i64) -> Self
    where
        I: IntoIterator<Item = &'a Process>,
    {
        let mut total = 0usize;
        let mut completed = 0usize;
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_burst: i64 = 0;

        for process in processes {
            total += 1;
            if !process.is_completed() {
                continue;
            }
            completed += 1;
            total_waiting += process.waiting_time().unwrap_or(0);
            total_turnaround += process.turnaround_time().unwrap_or(0);
            total_burst += process.burst_time();
        }

        if completed == 0 {
            return Self {
                total_processes: total,
                total_execution_time: now,
                ..Default::default()
            };
        }

        let n = completed as f64;
        let (throughput, cpu_utilization) = if now > 0 {
            let elapsed = now as f64;
            (n / (elapsed / 1000.0), total_burst as f64 / elapsed * 100.0)
        } else {
            (0.0, 0.0)
        };

        Self {
            total_processes: total,
            completed_processes: completed,
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
            throughput,
            cpu_utilization,
            total_execution_time: now,
        }
    }

    /// Fraction of known processes that have finished (0.0..=1.0).
    pub fn completion_rate(&self) -> f64 {
        if self.total_processes == 0 {
            0.0
        } else {
            self.completed_processes as f64 / self.total_processes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: u64, arrival: i64, burst: i64, start: i64) -> Process {
        let mut p = Process::new(id, arrival, burst, 10).unwrap();
        p.dispatch(start).unwrap();
        p.tick(burst).unwrap();
        p.finish(start + burst).unwrap();
        p
    }

    #[test]
    fn test_metrics_basic() {
        // P1 runs 0..1000, P2 arrives at 0 and runs 1000..3000
        let processes = vec![completed(1, 0, 1000, 0), completed(2, 0, 2000, 1000)];
        let m = AlgorithmMetrics::calculate(&processes, 4000);

        assert_eq!(m.total_processes, 2);
        assert_eq!(m.completed_processes, 2);
        assert!((m.average_waiting_time - 500.0).abs() < 1e-10); // (0 + 1000) / 2
        assert!((m.average_turnaround_time - 2000.0).abs() < 1e-10); // (1000 + 3000) / 2
        assert!((m.throughput - 0.5).abs() < 1e-10); // 2 / 4 s
        assert!((m.cpu_utilization - 75.0).abs() < 1e-10); // 3000 / 4000
        assert_eq!(m.total_execution_time, 4000);
    }

    #[test]
    fn test_metrics_ignore_unfinished() {
        let mut running = Process::new(3, 0, 5000, 10).unwrap();
        running.dispatch(1000).unwrap();
        let processes = vec![completed(1, 0, 1000, 0), running];
        let m = AlgorithmMetrics::calculate(&processes, 2000);

        assert_eq!(m.total_processes, 2);
        assert_eq!(m.completed_processes, 1);
        assert!((m.average_turnaround_time - 1000.0).abs() < 1e-10);
        assert!((m.completion_rate() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_none_completed() {
        let processes = vec![Process::new(1, 0, 10, 10).unwrap()];
        let m = AlgorithmMetrics::calculate(&processes, 0);

        assert_eq!(m.total_processes, 1);
        assert_eq!(m.completed_processes, 0);
        assert_eq!(m.average_waiting_time, 0.0);
        assert_eq!(m.average_turnaround_time, 0.0);
        assert_eq!(m.throughput, 0.0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert!(!m.throughput.is_nan());
    }

    #[test]
    fn test_metrics_empty() {
        let m = AlgorithmMetrics::calculate(std::iter::empty(), 500);
        assert_eq!(m.total_processes, 0);
        assert_eq!(m.total_execution_time, 500);
        assert_eq!(m.completion_rate(), 0.0);
    }

    #[test]
    fn test_metrics_idempotent() {
        let processes = vec![completed(1, 0, 300, 0), completed(2, 100, 200, 300)];
        let a = AlgorithmMetrics::calculate(&processes, 1000);
        let b = AlgorithmMetrics::calculate(&processes, 1000);
        assert_eq!(a, b);
    }
}
