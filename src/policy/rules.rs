//! Selection rules for choosing the next process to dispatch.
//!
//! A policy's selection order is a list of rules compared sequentially:
//! the next rule is consulted only when all previous rules tie. When every
//! rule ties, queue position decides (first queued wins).
//!
//! # Score Convention
//! **Lower score = dispatched first.**

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Process;

/// A rule that scores a ready process for dispatch.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SPT").
    fn name(&self) -> &'static str;

    /// Scores a process; lower = higher priority.
    fn evaluate(&self, process: &Process) -> i64;
}

/// First In, First Out: earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl SelectionRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> i64 {
        process.arrival_time()
    }
}

/// Shortest Processing Time: smallest total burst first.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl SelectionRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> i64 {
        process.burst_time()
    }
}

/// Shortest Remaining Processing Time: least work left first.
#[derive(Debug, Clone, Copy)]
pub struct Srpt;

impl SelectionRule for Srpt {
    fn name(&self) -> &'static str {
        "SRPT"
    }

    fn evaluate(&self, process: &Process) -> i64 {
        process.remaining_time()
    }
}

/// An ordered list of rules applied as successive tie-breakers.
pub type SelectionOrder = &'static [&'static dyn SelectionRule];

/// Compares two processes rule by rule.
///
/// Returns `Ordering::Equal` when every rule ties; callers keep queue order
/// by using stable sorts or first-minimum searches.
pub fn compare_sequential(order: SelectionOrder, a: &Process, b: &Process) -> Ordering {
    for rule in order {
        match rule.evaluate(a).cmp(&rule.evaluate(b)) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}
