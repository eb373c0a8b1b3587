//! Cross-policy metric ranking.
//!
//! Given the metrics of several policies at the same simulated time, finds
//! the best and worst policy for each headline metric.

use serde::Serialize;

use super::AlgorithmMetrics;
use crate::policy::PolicyKind;

/// Headline metrics that can be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricKind {
    AverageWaitingTime,
    AverageTurnaroundTime,
    Throughput,
    CpuUtilization,
}

impl MetricKind {
    /// All rankable metrics, in display order.
    pub const ALL: [MetricKind; 4] = [
        MetricKind::AverageWaitingTime,
        MetricKind::AverageTurnaroundTime,
        MetricKind::Throughput,
        MetricKind::CpuUtilization,
    ];

    /// Extracts this metric's value.
    pub fn value(&self, metrics: &AlgorithmMetrics) -> f64 {
        match self {
            MetricKind::AverageWaitingTime => metrics.average_waiting_time,
            MetricKind::AverageTurnaroundTime => metrics.average_turnaround_time,
            MetricKind::Throughput => metrics.throughput,
            MetricKind::CpuUtilization => metrics.cpu_utilization,
        }
    }

    /// Whether smaller values are better.
    pub fn lower_is_better(&self) -> bool {
        matches!(
            self,
            MetricKind::AverageWaitingTime | MetricKind::AverageTurnaroundTime
        )
    }
}

/// Best and worst policies for one metric. Ties list every tied policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRanking {
    pub metric: MetricKind,
    pub best: Vec<PolicyKind>,
    pub worst: Vec<PolicyKind>,
}

/// Per-metric rankings across policies.
///
/// # Example
/// ```
/// use u_cpusched::metrics::{AlgorithmMetrics, MetricKind, MetricsComparison};
/// use u_cpusched::policy::PolicyKind;
///
/// let fast = AlgorithmMetrics { average_waiting_time: 2.0, ..Default::default() };
/// let slow = AlgorithmMetrics { average_waiting_time: 9.0, ..Default::default() };
/// let cmp = MetricsComparison::compare(&[(PolicyKind::Srtf, fast), (PolicyKind::Fcfs, slow)]);
///
/// let waiting = cmp.ranking(MetricKind::AverageWaitingTime).unwrap();
/// assert_eq!(waiting.best, vec![PolicyKind::Srtf]);
/// assert_eq!(waiting.worst, vec![PolicyKind::Fcfs]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricsComparison {
    pub rankings: Vec<MetricRanking>,
}

const EPSILON: f64 = 1e-9;

impl MetricsComparison {
    /// Ranks every metric across the given policies.
    pub fn compare(entries: &[(PolicyKind, AlgorithmMetrics)]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let rankings = MetricKind::ALL
            .iter()
            .map(|&metric| {
                let values: Vec<f64> = entries.iter().map(|(_, m)| metric.value(m)).collect();
                let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let (best_value, worst_value) = if metric.lower_is_better() {
                    (min, max)
                } else {
                    (max, min)
                };

                let pick = |target: f64| -> Vec<PolicyKind> {
                    entries
                        .iter()
                        .zip(&values)
                        .filter(|(_, &v)| (v - target).abs() <= EPSILON)
                        .map(|((kind, _), _)| *kind)
                        .collect()
                };

                MetricRanking {
                    metric,
                    best: pick(best_value),
                    worst: pick(worst_value),
                }
            })
            .collect();

        Self { rankings }
    }

    /// Ranking for one metric.
    pub fn ranking(&self, metric: MetricKind) -> Option<&MetricRanking> {
        self.rankings.iter().find(|r| r.metric == metric)
    }

    /// Number of metrics on which `kind` is (jointly) best.
    pub fn wins(&self, kind: PolicyKind) -> usize {
        self.rankings
            .iter()
            .filter(|r| r.best.contains(&kind))
            .count()
    }
}
