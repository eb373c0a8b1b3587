//! Simulation domain models.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | One unit of CPU work and its lifecycle state |
//! | `ProcessStatus` | Waiting / Ready / Running / Completed |
//! | `SimulationConfig` | Generator bounds and process budget |

mod config;
mod process;

pub use config::SimulationConfig;
pub use process::{Process, ProcessStatus};
