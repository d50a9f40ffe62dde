//! Score and rating for a finished game, derived from the pegs left.

use crate::constants::{GOOD_SCORE_THRESHOLD, SCORE_STEP_PER_PEG, SCORE_TABLE};
use serde::{Deserialize, Serialize};

/// Qualitative rating tiers, best first.
///
/// The serialized form is the stable identifier (`"genius"`, ...), kept
/// separate from the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingTier {
    Genius,
    Intelligent,
    Cunning,
    Clever,
    Average,
    Beginner,
}

impl RatingTier {
    pub const ALL: [RatingTier; 6] = [
        RatingTier::Genius,
        RatingTier::Intelligent,
        RatingTier::Cunning,
        RatingTier::Clever,
        RatingTier::Average,
        RatingTier::Beginner,
    ];

    /// Stable identifier used for unlock logic and persistence.
    pub fn id(self) -> &'static str {
        match self {
            Self::Genius => "genius",
            Self::Intelligent => "intelligent",
            Self::Cunning => "cunning",
            Self::Clever => "clever",
            Self::Average => "average",
            Self::Beginner => "beginner",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Genius => "Genius",
            Self::Intelligent => "Intelligent",
            Self::Cunning => "Cunning",
            Self::Clever => "Clever",
            Self::Average => "Average",
            Self::Beginner => "Beginner",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Genius => "A single peg remains. Flawless.",
            Self::Intelligent => "Two pegs left. Very nearly perfect.",
            Self::Cunning => "Three pegs left. A sharp finish.",
            Self::Clever => "Four pegs left. Solid play.",
            Self::Average => "Five pegs left. Room to improve.",
            Self::Beginner => "Many pegs left. Keep practising.",
        }
    }

    /// Whether reaching this tier on a level unlocks the next one.
    pub fn unlocks_next_level(self) -> bool {
        matches!(self, Self::Genius | Self::Intelligent | Self::Cunning)
    }
}

/// Points for finishing with `peg_count` pegs. Strictly decreasing over
/// every count a board can hold, and never below zero past that.
pub fn score(peg_count: usize) -> u32 {
    let pegs = peg_count.max(1);
    match SCORE_TABLE.get(pegs - 1) {
        Some(&points) => points,
        None => {
            let last = SCORE_TABLE[SCORE_TABLE.len() - 1];
            let extra = (pegs - SCORE_TABLE.len()) as u32;
            last.saturating_sub(extra.saturating_mul(SCORE_STEP_PER_PEG))
        }
    }
}

/// Rating tier for finishing with `peg_count` pegs.
pub fn rating_tier(peg_count: usize) -> RatingTier {
    match peg_count {
        0 | 1 => RatingTier::Genius,
        2 => RatingTier::Intelligent,
        3 => RatingTier::Cunning,
        4 => RatingTier::Clever,
        5 => RatingTier::Average,
        _ => RatingTier::Beginner,
    }
}

/// Whether a score counts as a good finish.
pub fn is_good_score(score: u32) -> bool {
    score >= GOOD_SCORE_THRESHOLD
}
