//! pegsol - peg solitaire on a 7×7 board.
//!
//! The engine (`board`, `scoring`, `levels`, `session`) is pure and
//! synchronous. `stats` and `app` sit on top of it for the terminal
//! front-end in `main.rs`.

pub mod app;
pub mod board;
pub mod build_info;
pub mod constants;
pub mod error;
pub mod levels;
pub mod scoring;
pub mod session;
pub mod stats;

pub use board::{is_terminal, Board, Cell, Direction, Move, Position};
pub use error::{LevelError, PegError};
pub use levels::{Level, LevelCatalog};
pub use scoring::{rating_tier, score, RatingTier};
pub use session::{GameResult, GameSession};
pub use stats::GameStats;
