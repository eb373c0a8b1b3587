//! Discrete-time simulation driver.
//!
//! Owns one instance of each policy and replays an identical,
//! dynamically generated process stream into all of them in lockstep.
//! The driver makes no assumption about who calls [`Simulation::step`] or
//! how often, only that calls are sequential.
//!
//! # Components
//!
//! - `Simulation`: the driver state machine (Idle/Running/Paused/Completed).
//! - `GenerationBatch`: how many processes each generation check creates.
//! - `SimulationState`: serializable aggregate for presentation layers.

mod batch;
mod driver;
mod state;

pub use batch::GenerationBatch;
pub use driver::{Simulation, DEFAULT_TIME_LIMIT_MS};
pub use state::{PolicyReport, SimulationState, SimulationStatus};
