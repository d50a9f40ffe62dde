//! Player statistics: tracking, unlock gating and persistence.

pub mod persistence;
mod types;

pub use persistence::{load_stats, save_stats};
pub use types::GameStats;
