//! Merge score tracking

use serde::{Deserialize, Serialize};

use crate::consts::MERGE_SCORE;

/// Running score. Only ever grows, one fixed increment per merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u64,
    merges: u32,
}

impl ScoreTracker {
    /// Record one merge; returns the new total
    pub fn award_merge(&mut self) -> u64 {
        self.score = self.score.saturating_add(MERGE_SCORE);
        self.merges = self.merges.saturating_add(1);
        self.score
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn merges(&self) -> u32 {
        self.merges
    }

    /// HUD text
    pub fn label(&self) -> String {
        format!("Score: {}", self.score)
    }
}
