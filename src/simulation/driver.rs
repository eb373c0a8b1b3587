//! Lockstep simulation driver.
//!
//! # Algorithm (per `step(delta)`)
//!
//! 1. Advance every policy with the same `(delta, clock + delta)`.
//! 2. Commit the new global clock once every policy has accepted it.
//! 3. If the generation interval elapsed and budget remains, generate a
//!    batch; each policy receives its own clone of every process.
//! 4. Recompute per-policy metrics at the new clock.
//! 5. Complete once the budget is exhausted and every policy is drained,
//!    or once the clock reaches the safety time limit.

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;

use super::{GenerationBatch, PolicyReport, SimulationState, SimulationStatus};
use crate::error::{Result, SimulationError};
use crate::generator::ProcessGenerator;
use crate::metrics::{AlgorithmMetrics, MetricsComparison};
use crate::models::{Process, SimulationConfig};
use crate::policy::{PolicyKind, PolicySnapshot, Scheduler};

/// Default safety ceiling on simulated time (5 minutes).
pub const DEFAULT_TIME_LIMIT_MS: i64 = 300_000;

/// Runs FCFS, SJF and SRTF side by side over one generated process stream.
///
/// Single-threaded and synchronous: all state changes happen inside
/// [`step`](Simulation::step), which an external timer calls repeatedly.
///
/// # Example
///
/// ```
/// use u_cpusched::models::SimulationConfig;
/// use u_cpusched::policy::PolicyKind;
/// use u_cpusched::simulation::{GenerationBatch, Simulation, SimulationStatus};
///
/// let config = SimulationConfig::new(200, 50, 400, 1, 64, 5).unwrap();
/// let mut sim = Simulation::seeded(config, 42)
///     .unwrap()
///     .with_batch(GenerationBatch::Single);
///
/// sim.run(100).unwrap();
/// assert_eq!(sim.status(), SimulationStatus::Completed);
/// for kind in PolicyKind::ALL {
///     assert_eq!(sim.snapshot(kind).completed.len(), 5);
/// }
/// ```
#[derive(Debug)]
pub struct Simulation<R: Rng = StdRng> {
    config: SimulationConfig,
    status: SimulationStatus,
    clock: i64,
    last_generation_time: i64,
    generated_count: usize,
    generator: ProcessGenerator<R>,
    batch: GenerationBatch,
    time_limit: i64,
    policies: [Box<dyn Scheduler>; 3],
    metrics: [AlgorithmMetrics; 3],
}

fn slot(kind: PolicyKind) -> usize {
    match kind {
        PolicyKind::Fcfs => 0,
        PolicyKind::Sjf => 1,
        PolicyKind::Srtf => 2,
    }
}

impl Simulation<StdRng> {
    /// Creates an Idle simulation with an OS-seeded generator.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_generator(config, ProcessGenerator::new())
    }

    /// Creates an Idle simulation with a reproducible generator.
    pub fn seeded(config: SimulationConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, ProcessGenerator::seeded(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Creates an Idle simulation over a caller-supplied random source.
    pub fn with_rng(config: SimulationConfig, rng: R) -> Result<Self> {
        Self::with_generator(config, ProcessGenerator::with_rng(rng))
    }

    fn with_generator(config: SimulationConfig, generator: ProcessGenerator<R>) -> Result<Self> {
        config.validate()?;
        let policies = PolicyKind::ALL.map(|kind| kind.create());
        let metrics = PolicyKind::ALL.map(|kind| policies[slot(kind)].metrics(0));
        Ok(Self {
            config,
            status: SimulationStatus::Idle,
            clock: 0,
            last_generation_time: 0,
            generated_count: 0,
            generator,
            batch: GenerationBatch::default(),
            time_limit: DEFAULT_TIME_LIMIT_MS,
            policies,
            metrics,
        })
    }

    /// Sets the generation batch policy.
    pub fn with_batch(mut self, batch: GenerationBatch) -> Self {
        self.batch = batch;
        self
    }

    /// Sets the safety ceiling on simulated time (ms).
    ///
    /// Checked after every step: a limit of zero or below completes the run
    /// on its first step, whatever work remains.
    pub fn with_time_limit(mut self, time_limit_ms: i64) -> Self {
        self.time_limit = time_limit_ms;
        self
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    /// Global clock (ms).
    pub fn clock(&self) -> i64 {
        self.clock
    }

    pub fn generated_count(&self) -> usize {
        self.generated_count
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Idle/Paused → Running.
    pub fn start(&mut self) {
        match self.status {
            SimulationStatus::Idle | SimulationStatus::Paused => {
                info!("simulation started at {}", self.clock);
                self.status = SimulationStatus::Running;
            }
            SimulationStatus::Running | SimulationStatus::Completed => {
                trace!("start ignored in status {:?}", self.status);
            }
        }
    }

    /// Running → Paused.
    pub fn pause(&mut self) {
        if self.status == SimulationStatus::Running {
            info!("simulation paused at {}", self.clock);
            self.status = SimulationStatus::Paused;
        }
    }

    /// Clears every policy, the clock, the generation counters and the id
    /// counter; returns to Idle.
    pub fn reset(&mut self) {
        for policy in self.policies.iter_mut() {
            policy.reset();
        }
        self.clock = 0;
        self.last_generation_time = 0;
        self.generated_count = 0;
        self.generator.reset_ids();
        self.status = SimulationStatus::Idle;
        self.refresh_metrics();
        info!("simulation reset");
    }

    /// Replaces the configuration. Applies from the next generation check.
    ///
    /// # Errors
    /// [`SimulationError::ConfigValidation`]; the current config is kept.
    pub fn configure(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        debug!("configuration replaced: {:?}", config);
        self.config = config;
        Ok(())
    }

    /// Hands a caller-built process to every policy.
    ///
    /// Injected processes do not count toward the generation budget but
    /// must complete before the run does.
    pub fn inject(&mut self, process: Process) -> Result<()> {
        for policy in self.policies.iter_mut() {
            policy.add_process(process.clone())?;
        }
        self.refresh_metrics();
        Ok(())
    }

    /// Advances the whole simulation by `delta` ms. No-op unless Running.
    ///
    /// # Errors
    /// [`SimulationError::InvalidDelta`] for `delta <= 0` or a clock
    /// overflow. On any error the driver clock is left unchanged.
    pub fn step(&mut self, delta: i64) -> Result<()> {
        if self.status != SimulationStatus::Running {
            trace!("step ignored in status {:?}", self.status);
            return Ok(());
        }
        if delta <= 0 {
            return Err(SimulationError::InvalidDelta(delta));
        }

        let clock = self
            .clock
            .checked_add(delta)
            .ok_or(SimulationError::InvalidDelta(delta))?;
        for policy in self.policies.iter_mut() {
            policy.advance(delta, Some(clock))?;
        }
        self.clock = clock;

        self.generate_due()?;
        self.refresh_metrics();
        self.check_termination();
        Ok(())
    }

    /// Starts (if needed) and steps until Completed.
    ///
    /// Terminates: the clock grows by `delta` every step and the time limit
    /// forces completion.
    pub fn run(&mut self, delta: i64) -> Result<()> {
        if delta <= 0 {
            return Err(SimulationError::InvalidDelta(delta));
        }
        self.start();
        while self.status == SimulationStatus::Running {
            self.step(delta)?;
        }
        Ok(())
    }

    fn policy(&self, kind: PolicyKind) -> &dyn Scheduler {
        self.policies[slot(kind)].as_ref()
    }

    /// Snapshot of one policy.
    pub fn snapshot(&self, kind: PolicyKind) -> PolicySnapshot {
        self.policy(kind).snapshot()
    }

    /// Snapshot by policy name ("FCFS", "sjf", ...).
    pub fn snapshot_by_name(&self, name: &str) -> Result<PolicySnapshot> {
        Ok(self.snapshot(name.parse()?))
    }

    /// Metrics of one policy at the current clock.
    pub fn metrics(&self, kind: PolicyKind) -> AlgorithmMetrics {
        self.metrics[slot(kind)].clone()
    }

    /// Metrics by policy name.
    pub fn metrics_by_name(&self, name: &str) -> Result<AlgorithmMetrics> {
        Ok(self.metrics(name.parse()?))
    }

    /// Best/worst policy per metric at the current clock.
    pub fn comparison(&self) -> MetricsComparison {
        let entries: Vec<(PolicyKind, AlgorithmMetrics)> = PolicyKind::ALL
            .iter()
            .map(|&kind| (kind, self.metrics(kind)))
            .collect();
        MetricsComparison::compare(&entries)
    }

    /// Aggregated state for presentation.
    pub fn state(&self) -> SimulationState {
        SimulationState {
            status: self.status,
            clock: self.clock,
            generated_count: self.generated_count,
            last_generation_time: self.last_generation_time,
            config: self.config.clone(),
            policies: PolicyKind::ALL
                .iter()
                .map(|&kind| PolicyReport {
                    kind,
                    name: kind.name(),
                    snapshot: self.snapshot(kind),
                    metrics: self.metrics(kind),
                })
                .collect(),
        }
    }

    fn generate_due(&mut self) -> Result<()> {
        let budget = self
            .config
            .max_processes
            .saturating_sub(self.generated_count);
        let elapsed = self.clock - self.last_generation_time;
        if budget == 0 || elapsed < self.config.process_generation_interval_ms {
            return Ok(());
        }

        let count = self.batch.batch_size(self.generated_count, budget);
        for i in 0..count {
            let arrival = self.clock + i as i64 * self.batch.stagger_ms();
            let process = self.generator.generate(&self.config, arrival)?;
            for policy in self.policies.iter_mut() {
                policy.add_process(process.clone())?;
            }
            self.generated_count += 1;
        }
        self.last_generation_time = self.clock;

        info!(
            "generated {} process(es) at {} ({}/{})",
            count, self.clock, self.generated_count, self.config.max_processes
        );
        Ok(())
    }

    fn refresh_metrics(&mut self) {
        let clock = self.clock;
        self.metrics = PolicyKind::ALL.map(|kind| self.policies[slot(kind)].metrics(clock));
    }

    fn check_termination(&mut self) {
        let budget_spent = self.generated_count >= self.config.max_processes;
        if budget_spent && self.policies.iter().all(|p| p.is_drained()) {
            info!(
                "simulation complete at {}: all {} processes finished",
                self.clock, self.generated_count
            );
            self.status = SimulationStatus::Completed;
        } else if self.clock >= self.time_limit {
            warn!(
                "simulation stopped at time limit {} ({} of {} generated)",
                self.time_limit, self.generated_count, self.config.max_processes
            );
            self.status = SimulationStatus::Completed;
        }
    }
}
