//! Discrete-time CPU scheduling simulator.
//!
//! Runs First-Come First-Served, Shortest Job First and Shortest Remaining
//! Time First side by side over one randomly generated process stream, and
//! reports comparative performance metrics for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessStatus`, `SimulationConfig`
//! - **`policy`**: The `Scheduler` contract and the FCFS / SJF / SRTF policies
//! - **`metrics`**: Per-policy metrics, cross-policy ranking, config analysis
//! - **`generator`**: Random process synthesis with an injectable RNG
//! - **`simulation`**: The lockstep driver and its presentation state
//! - **`validation`**: Input integrity checks for processes and configurations
//! - **`error`**: The crate's error type
//!
//! # Quick start
//!
//! ```
//! use u_cpusched::models::SimulationConfig;
//! use u_cpusched::policy::PolicyKind;
//! use u_cpusched::simulation::Simulation;
//!
//! let mut sim = Simulation::seeded(SimulationConfig::balanced(), 1).unwrap();
//! sim.start();
//! for _ in 0..100 {
//!     sim.step(100).unwrap();
//! }
//! let srtf = sim.metrics(PolicyKind::Srtf);
//! assert!(srtf.average_waiting_time >= 0.0);
//! ```
//!
//! # Logging
//!
//! The crate logs through the `log` facade and never installs a logger.
//! Driver lifecycle and generation batches are `info`, dispatch and
//! preemption decisions `debug`, per-process queue traffic `trace`.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod simulation;
pub mod validation;

pub use error::{Result, SimulationError};
