//! Generation pressure: how many processes each generation check creates.

use serde::{Deserialize, Serialize};

/// Batch-size policy applied when a generation interval elapses.
///
/// Batch size only shapes load; it has no bearing on scheduling
/// correctness. Every batch is capped by the remaining process budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenerationBatch {
    /// One process per interval.
    Single,
    /// Front-loaded bursts: up to 5 while fewer than 8 processes exist,
    /// up to 3 while fewer than 15, then 1. Processes within a batch
    /// arrive 50 ms apart.
    #[default]
    Tapered,
}

impl GenerationBatch {
    /// Number of processes to create now.
    pub fn batch_size(&self, generated: usize, remaining_budget: usize) -> usize {
        let wanted = match self {
            GenerationBatch::Single => 1,
            GenerationBatch::Tapered => match generated {
                0..=7 => 5,
                8..=14 => 3,
                _ => 1,
            },
        };
        wanted.min(remaining_budget)
    }

    /// Arrival offset between consecutive processes of one batch (ms).
    pub fn stagger_ms(&self) -> i64 {
        match self {
            GenerationBatch::Single => 0,
            GenerationBatch::Tapered => 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        assert_eq!(GenerationBatch::Single.batch_size(0, 10), 1);
        assert_eq!(GenerationBatch::Single.batch_size(9, 0), 0);
    }

    #[test]
    fn test_tapered_phases() {
        let batch = GenerationBatch::Tapered;
        assert_eq!(batch.batch_size(0, 20), 5);
        assert_eq!(batch.batch_size(7, 20), 5);
        assert_eq!(batch.batch_size(8, 20), 3);
        assert_eq!(batch.batch_size(14, 20), 3);
        assert_eq!(batch.batch_size(15, 20), 1);
    }

    #[test]
    fn test_capped_by_budget() {
        assert_eq!(GenerationBatch::Tapered.batch_size(0, 2), 2);
    }
}
