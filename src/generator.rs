//! Random process synthesis.
//!
//! The generator owns the only id counter in a simulation. Ids start at 1,
//! increase monotonically and are reset together with the driver. The
//! random source is injected so tests can run with a seeded generator.

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::models::{Process, SimulationConfig};

/// Synthesizes processes within a configuration's bounds.
///
/// # Example
/// ```
/// use u_cpusched::generator::ProcessGenerator;
/// use u_cpusched::models::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// let mut generator = ProcessGenerator::seeded(7);
/// let p = generator.generate(&config, 0).unwrap();
/// assert_eq!(p.id(), 1);
/// assert!(p.burst_time() >= config.min_burst_time && p.burst_time() <= config.max_burst_time);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessGenerator<R: Rng = StdRng> {
    rng: R,
    next_id: u64,
}

impl ProcessGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ProcessGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ProcessGenerator<R> {
    /// Creates a generator over a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Id the next generated process will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Restarts ids at 1. The random source is left as is.
    pub fn reset_ids(&mut self) {
        self.next_id = 1;
    }

    /// Draws a Waiting process arriving at `arrival_time`.
    ///
    /// Burst and size are uniform over the config's inclusive ranges.
    ///
    /// # Errors
    /// [`SimulationError::ConfigValidation`](crate::SimulationError::ConfigValidation)
    /// if `config` violates its constraints (e.g. an inverted range),
    /// `Validation` if `arrival_time` is negative. No id is consumed on error.
    pub fn generate(&mut self, config: &SimulationConfig, arrival_time: i64) -> Result<Process> {
        config.validate()?;
        let burst_time = self
            .rng
            .random_range(config.min_burst_time..=config.max_burst_time);
        let size = self
            .rng
            .random_range(config.min_process_size..=config.max_process_size);

        let process = Process::new(self.next_id, arrival_time, burst_time, size)?;
        self.next_id += 1;
        trace!(
            "generated {} (arrival={}, burst={}, size={})",
            process.name(),
            arrival_time,
            burst_time,
            size
        );
        Ok(process)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::models::ProcessStatus;
    use rand::rngs::SmallRng;

    fn config() -> SimulationConfig {
        SimulationConfig::new(1000, 10, 20, 1, 4, 50).unwrap()
    }

    #[test]
    fn test_ids_monotonic() {
        let mut generator = ProcessGenerator::with_rng(SmallRng::seed_from_u64(1));
        let ids: Vec<u64> = (0..5)
            .map(|_| generator.generate(&config(), 0).unwrap().id())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(generator.next_id(), 6);
    }

    #[test]
    fn test_values_within_bounds() {
        let config = config();
        let mut generator = ProcessGenerator::with_rng(SmallRng::seed_from_u64(42));
        for i in 0..200 {
            let p = generator.generate(&config, i).unwrap();
            assert!((config.min_burst_time..=config.max_burst_time).contains(&p.burst_time()));
            assert!((config.min_process_size..=config.max_process_size).contains(&p.size()));
            assert_eq!(p.arrival_time(), i);
            assert_eq!(p.remaining_time(), p.burst_time());
            assert_eq!(p.status(), ProcessStatus::Waiting);
            assert_eq!(p.name(), format!("P{}", p.id()));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let config = config();
        let mut a = ProcessGenerator::seeded(99);
        let mut b = ProcessGenerator::seeded(99);
        for _ in 0..20 {
            assert_eq!(
                a.generate(&config, 0).unwrap(),
                b.generate(&config, 0).unwrap()
            );
        }
    }

    #[test]
    fn test_reset_ids() {
        let mut generator = ProcessGenerator::seeded(3);
        generator.generate(&config(), 0).unwrap();
        generator.generate(&config(), 0).unwrap();
        generator.reset_ids();
        assert_eq!(generator.generate(&config(), 0).unwrap().id(), 1);
    }

    #[test]
    fn test_unvalidated_config_rejected() {
        let inverted = SimulationConfig {
            min_burst_time: 10,
            max_burst_time: 5,
            ..SimulationConfig::default()
        };
        let mut generator = ProcessGenerator::seeded(3);
        assert!(matches!(
            generator.generate(&inverted, 0),
            Err(SimulationError::ConfigValidation(_))
        ));
        assert_eq!(generator.next_id(), 1);

        let empty_sizes = SimulationConfig {
            min_process_size: 50,
            max_process_size: 1,
            ..SimulationConfig::default()
        };
        assert!(generator.generate(&empty_sizes, 0).is_err());
    }

    #[test]
    fn test_negative_arrival_rejected() {
        let mut generator = ProcessGenerator::seeded(3);
        assert!(generator.generate(&config(), -1).is_err());
        assert_eq!(generator.next_id(), 1);
    }
}
