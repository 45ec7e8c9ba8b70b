//! Best-score record
//!
//! A single scalar survives across runs. The new-best rule is decided here
//! so the simulation and the persistence layer agree on it.

use serde::{Deserialize, Serialize};

/// The persisted best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub best: u32,
}

impl BestScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Ties count as a new best only for a nonzero score, except on the very
    /// first run when nothing has ever been recorded
    pub fn qualifies(&self, score: u32) -> bool {
        score >= self.best && (score > 0 || self.best == 0)
    }

    /// Record a run's final score. Returns true when it became the new best.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }
}
