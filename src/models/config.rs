//! Simulation configuration.
//!
//! Bounds for the process generator and the run's process budget.
//! A configuration is replaced wholesale on reconfiguration; the driver
//! never mutates one in place.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::validation::validate_config;

/// Generator bounds and process budget for a simulation run.
///
/// All times are in simulated milliseconds. Sizes are abstract memory units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Minimum simulated time between two generation batches (ms).
    pub process_generation_interval_ms: i64,
    /// Lower bound of the generated burst time (ms, inclusive).
    pub min_burst_time: i64,
    /// Upper bound of the generated burst time (ms, inclusive).
    pub max_burst_time: i64,
    /// Lower bound of the generated process size (inclusive).
    pub min_process_size: i64,
    /// Upper bound of the generated process size (inclusive).
    pub max_process_size: i64,
    /// Total number of processes generated over the run.
    pub max_processes: usize,
}

impl SimulationConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// [`SimulationError::ConfigValidation`] listing every violated constraint.
    ///
    /// # Example
    /// ```
    /// use u_cpusched::models::SimulationConfig;
    ///
    /// assert!(SimulationConfig::new(3000, 1000, 8000, 10, 100, 20).is_ok());
    /// assert!(SimulationConfig::new(3000, 10, 5, 10, 100, 20).is_err());
    /// ```
    pub fn new(
        process_generation_interval_ms: i64,
        min_burst_time: i64,
        max_burst_time: i64,
        min_process_size: i64,
        max_process_size: i64,
        max_processes: usize,
    ) -> Result<Self> {
        let config = Self {
            process_generation_interval_ms,
            min_burst_time,
            max_burst_time,
            min_process_size,
            max_process_size,
            max_processes,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks all constraints.
    pub fn validate(&self) -> Result<()> {
        validate_config(self).map_err(SimulationError::ConfigValidation)
    }

    /// Wide burst range, moderate pressure.
    pub fn fcfs_friendly() -> Self {
        Self {
            process_generation_interval_ms: 4000,
            min_burst_time: 3000,
            max_burst_time: 4000,
            min_process_size: 20,
            max_process_size: 80,
            max_processes: 12,
        }
    }

    /// Highly variable bursts under high pressure; shows SJF's advantage.
    pub fn sjf_friendly() -> Self {
        Self {
            process_generation_interval_ms: 2000,
            min_burst_time: 500,
            max_burst_time: 10_000,
            min_process_size: 5,
            max_process_size: 150,
            max_processes: 25,
        }
    }

    /// Showcase run with a very wide burst spread.
    pub fn demonstration() -> Self {
        Self {
            process_generation_interval_ms: 2500,
            min_burst_time: 800,
            max_burst_time: 12_000,
            min_process_size: 10,
            max_process_size: 120,
            max_processes: 18,
        }
    }

    /// Moderate spread for a fair side-by-side comparison.
    pub fn balanced() -> Self {
        Self {
            process_generation_interval_ms: 3000,
            min_burst_time: 2000,
            max_burst_time: 6000,
            min_process_size: 15,
            max_process_size: 100,
            max_processes: 15,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_generation_interval_ms: 3000,
            min_burst_time: 1000,
            max_burst_time: 8000,
            min_process_size: 10,
            max_process_size: 100,
            max_processes: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_presets_are_valid() {
        for config in [
            SimulationConfig::default(),
            SimulationConfig::fcfs_friendly(),
            SimulationConfig::sjf_friendly(),
            SimulationConfig::demonstration(),
            SimulationConfig::balanced(),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
    }

    #[test]
    fn test_inverted_burst_range_rejected() {
        let err = SimulationConfig::new(3000, 10, 5, 10, 100, 20).unwrap_err();
        match err {
            SimulationError::ConfigValidation(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::InvalidBurstRange);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(SimulationConfig::new(3000, 1, 5, 1, 5, 0).is_err());
    }

    #[test]
    fn test_json_roundtrip_keeps_validation_explicit() {
        let json = r#"{
            "process_generation_interval_ms": 1000,
            "min_burst_time": 9,
            "max_burst_time": 3,
            "min_process_size": 1,
            "max_process_size": 2,
            "max_processes": 4
        }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
