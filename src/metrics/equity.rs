//! Fairness analysis of a simulation configuration.
//!
//! The spread of generated burst times decides which policy a run will
//! favor: near-uniform bursts leave FCFS competitive, wide spreads make the
//! convoy effect dominate and hand the advantage to shortest-job policies.

use serde::Serialize;

use crate::models::SimulationConfig;

/// How evenly a configuration treats the compared policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquityLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// Which policy family a configuration tends to favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FavoredPolicy {
    Fcfs,
    Balanced,
    ShortestJob,
}

/// How quickly new processes are injected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GenerationPressure {
    High,
    Medium,
    Low,
}

/// Result of [`ConfigAnalysis::analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigAnalysis {
    /// `max_burst_time / min_burst_time`.
    pub burst_ratio: f64,
    /// `max_burst_time - min_burst_time` (ms).
    pub burst_spread: i64,
    pub equity: EquityLevel,
    pub favors: FavoredPolicy,
    pub pressure: GenerationPressure,
}

impl ConfigAnalysis {
    /// Classifies a configuration.
    ///
    /// | Burst ratio | Equity | Favors |
    /// |-------------|--------|--------|
    /// | ≤ 2 | Excellent | FCFS |
    /// | ≤ 3 | Good | Balanced |
    /// | ≤ 5 | Fair | Shortest job |
    /// | > 5 | Poor | Shortest job |
    ///
    /// Pressure: interval ≤ 2 s High, ≤ 4 s Medium, otherwise Low.
    pub fn analyze(config: &SimulationConfig) -> Self {
        let burst_ratio = config.max_burst_time as f64 / config.min_burst_time.max(1) as f64;
        let burst_spread = config.max_burst_time - config.min_burst_time;

        let (equity, favors) = if burst_ratio <= 2.0 {
            (EquityLevel::Excellent, FavoredPolicy::Fcfs)
        } else if burst_ratio <= 3.0 {
            (EquityLevel::Good, FavoredPolicy::Balanced)
        } else if burst_ratio <= 5.0 {
            (EquityLevel::Fair, FavoredPolicy::ShortestJob)
        } else {
            (EquityLevel::Poor, FavoredPolicy::ShortestJob)
        };

        let pressure = match config.process_generation_interval_ms {
            i if i <= 2000 => GenerationPressure::High,
            i if i <= 4000 => GenerationPressure::Medium,
            _ => GenerationPressure::Low,
        };

        Self {
            burst_ratio,
            burst_spread,
            equity,
            favors,
            pressure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_friendly_is_excellent() {
        let a = ConfigAnalysis::analyze(&SimulationConfig::fcfs_friendly());
        assert!((a.burst_ratio - 4000.0 / 3000.0).abs() < 1e-10);
        assert_eq!(a.burst_spread, 1000);
        assert_eq!(a.equity, EquityLevel::Excellent);
        assert_eq!(a.favors, FavoredPolicy::Fcfs);
        assert_eq!(a.pressure, GenerationPressure::Medium);
    }

    #[test]
    fn test_balanced_is_good() {
        let a = ConfigAnalysis::analyze(&SimulationConfig::balanced());
        assert_eq!(a.equity, EquityLevel::Good);
        assert_eq!(a.favors, FavoredPolicy::Balanced);
    }

    #[test]
    fn test_sjf_friendly_is_poor_with_high_pressure() {
        let a = ConfigAnalysis::analyze(&SimulationConfig::sjf_friendly());
        assert!((a.burst_ratio - 20.0).abs() < 1e-10);
        assert_eq!(a.equity, EquityLevel::Poor);
        assert_eq!(a.favors, FavoredPolicy::ShortestJob);
        assert_eq!(a.pressure, GenerationPressure::High);
    }

    #[test]
    fn test_ratio_boundaries() {
        let config = SimulationConfig {
            min_burst_time: 1000,
            max_burst_time: 5000,
            process_generation_interval_ms: 5000,
            ..Default::default()
        };
        let a = ConfigAnalysis::analyze(&config);
        assert_eq!(a.equity, EquityLevel::Fair);
        assert_eq!(a.pressure, GenerationPressure::Low);
    }
}
