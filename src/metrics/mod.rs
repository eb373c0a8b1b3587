//! Performance metrics and comparative analysis.
//!
//! # Components
//!
//! - `AlgorithmMetrics`: pure calculator over one policy's processes
//!   (waiting, turnaround, throughput, utilization).
//! - `MetricsComparison`: best/worst policy per metric.
//! - `ConfigAnalysis`: how a configuration's burst spread biases the comparison.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2:
//!   Scheduling Criteria

mod algorithm;
mod comparison;
mod equity;

pub use algorithm::AlgorithmMetrics;
pub use comparison::{MetricKind, MetricRanking, MetricsComparison};
pub use equity::{ConfigAnalysis, EquityLevel, FavoredPolicy, GenerationPressure};
