//! Persistent player statistics and level-unlock gating.

use crate::constants::WIN_MAX_PEGS;
use crate::scoring::{self, RatingTier};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Lifetime statistics, saved between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub total_score: u64,
    pub high_score: u32,
    /// Unix timestamp of the last finished game.
    pub last_played: Option<i64>,
    /// Every tier ever reached, per 1-based level.
    pub achievements_by_level: BTreeMap<usize, BTreeSet<RatingTier>>,
}

impl GameStats {
    /// Record a finished game on `level` ending with `peg_count` pegs.
    /// Returns the tier reached.
    pub fn record_game(&mut self, level: usize, peg_count: usize, now: i64) -> RatingTier {
        let score = scoring::score(peg_count);
        let tier = scoring::rating_tier(peg_count);

        self.games_played += 1;
        self.total_score += u64::from(score);
        self.high_score = self.high_score.max(score);
        if peg_count <= WIN_MAX_PEGS {
            self.games_won += 1;
        }
        self.last_played = Some(now);
        self.achievements_by_level
            .entry(level)
            .or_default()
            .insert(tier);

        tier
    }

    /// Tiers reached on `level`, best first.
    pub fn tiers_for(&self, level: usize) -> Vec<RatingTier> {
        self.achievements_by_level
            .get(&level)
            .map(|tiers| tiers.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Best tier ever reached on `level`.
    pub fn best_tier(&self, level: usize) -> Option<RatingTier> {
        self.achievements_by_level
            .get(&level)
            .and_then(|tiers| tiers.iter().next().copied())
    }

    /// Whether `level` was ever finished with a tier that unlocks the next.
    pub fn has_unlock_tier(&self, level: usize) -> bool {
        self.achievements_by_level
            .get(&level)
            .is_some_and(|tiers| tiers.iter().any(|t| t.unlocks_next_level()))
    }

    /// Highest playable level. Level 1 is always open; each further level
    /// opens once the one before it has an unlocking tier.
    pub fn highest_unlocked_level(&self, level_count: usize) -> usize {
        let mut highest = 1;
        for level in 1..level_count {
            if self.has_unlock_tier(level) {
                highest = level + 1;
            } else {
                break;
            }
        }
        highest
    }

    pub fn is_unlocked(&self, level: usize, level_count: usize) -> bool {
        level >= 1 && level <= self.highest_unlocked_level(level_count)
    }

    pub fn average_score(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games_played)
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}
