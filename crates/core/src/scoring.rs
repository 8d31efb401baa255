//! Scoring module - line clear points, combo streak and high score
//!
//! Rules:
//! - A placement that clears nothing resets the combo and scores nothing.
//! - A clearing placement bumps the combo first, then scores
//!   `lines * BASE_POINTS * max(1, combo)`.
//! - The high score follows the running score upward and is persisted on
//!   every increase.

use tracing::{info, warn};

use crate::highscore::HighScoreStore;
use crate::types::BASE_POINTS;

/// Points for one placement clearing `lines` lines at the given combo
pub fn calculate_points(lines: u32, combo: u32) -> u32 {
    lines
        .saturating_mul(BASE_POINTS)
        .saturating_mul(combo.max(1))
}

/// Result of feeding one placement into the score keeper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreUpdate {
    pub points: u32,
    /// Running score after this placement
    pub score: u32,
    pub combo: u32,
    pub new_high_score: bool,
}

/// Score, combo, line total and the persisted high score
#[derive(Debug, Clone)]
pub struct ScoreKeeper<S> {
    score: u32,
    combo: u32,
    lines: u32,
    high_score: u32,
    store: S,
}

impl<S: HighScoreStore> ScoreKeeper<S> {
    /// Reads the high score from `store` once.
    pub fn new(mut store: S) -> Self {
        let high_score = store.load();
        Self {
            score: 0,
            combo: 0,
            lines: 0,
            high_score,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Account for one committed placement that cleared `lines` lines.
    pub fn register_clear(&mut self, lines: u32) -> ScoreUpdate {
        if lines == 0 {
            self.combo = 0;
            return ScoreUpdate {
                points: 0,
                score: self.score,
                combo: 0,
                new_high_score: false,
            };
        }

        self.combo += 1;
        let points = calculate_points(lines, self.combo);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines);

        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
            info!(high_score = self.high_score, "new high score");
            // Losing the write only costs persistence; play goes on.
            if let Err(err) = self.store.save(self.high_score) {
                warn!(error = %err, "failed to persist high score");
            }
        }

        ScoreUpdate {
            points,
            score: self.score,
            combo: self.combo,
            new_high_score,
        }
    }

    /// Zero score, combo and lines; the high score is kept.
    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 0;
        self.lines = 0;
    }
}
