//! Error types for the peg solitaire engine.

use crate::board::Position;
use thiserror::Error;

/// Errors raised by board, session and catalog operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PegError {
    /// The jump is not among the legal destinations of `from`.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// No level exists at this 1-based index.
    #[error("level {0} not found")]
    LevelNotFound(usize),

    /// The session already reached a terminal state.
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Level(#[from] LevelError),
}

/// Malformed level data, detected when the catalog is loaded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level {level}: expected 7 rows, found {found}")]
    RowCount { level: usize, found: usize },

    #[error("level {level}: row {row} has {found} cells, expected 7")]
    RowWidth {
        level: usize,
        row: usize,
        found: usize,
    },

    #[error("level {level}: unknown cell '{ch}' at {position}")]
    UnknownCell {
        level: usize,
        ch: char,
        position: Position,
    },

    #[error("level {level}: start hole {position} is not a hole")]
    StartOffBoard { level: usize, position: Position },

    #[error("level {level}: layout has only {holes} holes")]
    TooFewHoles { level: usize, holes: usize },

    #[error("level {level}: holes do not form a single connected region")]
    Disconnected { level: usize },

    /// The starting board is already finished: one peg, or no peg can jump.
    #[error("level {level}: no jump is possible from the starting layout")]
    NoOpeningMove { level: usize },
}
