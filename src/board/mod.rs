//! Board engine: cell layout, legal jumps, move application and
//! terminal-state detection.

mod logic;
mod types;

pub use logic::is_terminal;
pub use types::{Board, Cell, Direction, Move, Position};
