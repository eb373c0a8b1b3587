//! Error taxonomy for the simulation engine.
//!
//! Every failure here is a caller bug: the engine is a deterministic step
//! function with no retries. Errors are returned immediately, never logged
//! and swallowed.

use crate::models::ProcessStatus;
use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised by the scheduling engine.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A process could not be constructed from the given data.
    Validation(Vec<ValidationError>),

    /// A lifecycle operation was invoked from a state that forbids it.
    ///
    /// A correct driver never produces this; it signals a logic bug.
    InvalidTransition {
        process_id: u64,
        status: ProcessStatus,
        operation: &'static str,
    },

    /// A simulation configuration violates its constraints.
    ConfigValidation(Vec<ValidationError>),

    /// The supplied global clock is behind the policy's own clock.
    ClockRegression { current: i64, requested: i64 },

    /// Time advances must be strictly positive.
    InvalidDelta(i64),

    /// No policy is registered under the given name.
    UnknownPolicy(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Validation(errors) => {
                write!(f, "Invalid process: {}", join_messages(errors))
            }
            SimulationError::InvalidTransition {
                process_id,
                status,
                operation,
            } => write!(
                f,
                "Invalid transition: cannot {} process {} in status {}",
                operation, process_id, status
            ),
            SimulationError::ConfigValidation(errors) => {
                write!(f, "Invalid config: {}", join_messages(errors))
            }
            SimulationError::ClockRegression { current, requested } => write!(
                f,
                "Clock regression: policy clock is {}, requested {}",
                current, requested
            ),
            SimulationError::InvalidDelta(delta) => {
                write!(f, "Invalid time step: {} (must be > 0)", delta)
            }
            SimulationError::UnknownPolicy(name) => write!(f, "Unknown policy: {}", name),
        }
    }
}

impl std::error::Error for SimulationError {}
