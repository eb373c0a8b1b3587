//! Input validation for processes and simulation configurations.
//!
//! Checks field-level integrity before a value enters the engine. Detects:
//! - Non-positive burst times and process sizes
//! - Negative arrival times
//! - Generation intervals outside `(0, 10 s]`
//! - Inverted or non-positive burst/size ranges
//! - Zero process budgets
//!
//! All failures are collected, not only the first one.

use crate::models::SimulationConfig;

/// Upper bound on the process generation interval (ms).
pub const MAX_GENERATION_INTERVAL_MS: i64 = 10_000;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Burst time is zero or negative.
    NonPositiveBurstTime,
    /// Memory footprint is zero or negative.
    NonPositiveSize,
    /// Arrival time is before the simulation epoch.
    NegativeArrivalTime,
    /// Generation interval is zero, negative or above the maximum.
    InvalidGenerationInterval,
    /// Burst range bounds are non-positive or not strictly increasing.
    InvalidBurstRange,
    /// Size range bounds are non-positive or not strictly increasing.
    InvalidSizeRange,
    /// Process budget is zero.
    InvalidMaxProcesses,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the timing inputs of a process.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process(arrival_time: i64, burst_time: i64, size: i64) -> ValidationResult {
    let mut errors = Vec::new();

    if burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurstTime,
            format!("Burst time must be greater than 0 (got {burst_time})"),
        ));
    }
    if size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveSize,
            format!("Process size must be greater than 0 (got {size})"),
        ));
    }
    if arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrivalTime,
            format!("Arrival time cannot be negative (got {arrival_time})"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a simulation configuration.
///
/// Checks:
/// 1. `0 < process_generation_interval_ms <= 10_000`
/// 2. Both burst bounds positive and `min_burst_time < max_burst_time`
/// 3. Both size bounds positive and `min_process_size < max_process_size`
/// 4. `max_processes > 0`
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let interval = config.process_generation_interval_ms;
    if interval <= 0 || interval > MAX_GENERATION_INTERVAL_MS {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidGenerationInterval,
            format!(
                "Process generation interval must be in (0, {MAX_GENERATION_INTERVAL_MS}] ms (got {interval})"
            ),
        ));
    }

    if config.min_burst_time <= 0 || config.max_burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurstRange,
            "Burst times must be greater than 0",
        ));
    } else if config.min_burst_time >= config.max_burst_time {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurstRange,
            format!(
                "Min burst time must be less than max burst time ({} >= {})",
                config.min_burst_time, config.max_burst_time
            ),
        ));
    }

    if config.min_process_size <= 0 || config.max_process_size <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSizeRange,
            "Process sizes must be greater than 0",
        ));
    } else if config.min_process_size >= config.max_process_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidSizeRange,
            format!(
                "Min process size must be less than max process size ({} >= {})",
                config.min_process_size, config.max_process_size
            ),
        ));
    }

    if config.max_processes == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidMaxProcesses,
            "Max processes must be greater than 0",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
