//! Move legality, move application and termination checks.

use super::{Board, Cell, Direction, Move, Position};
use crate::constants::BOARD_SIZE;
use crate::error::PegError;
use crate::levels::Level;

impl Board {
    /// Lay out a fresh board for `level`: every hole gets a peg except the
    /// level's start hole. Calling this twice yields identical boards.
    pub fn initialize(level: &Level) -> Board {
        let mut cells = [[Cell::OffBoard; BOARD_SIZE]; BOARD_SIZE];
        for pos in Position::all() {
            if level.is_hole(pos) {
                cells[pos.row][pos.col] = if pos == level.start() {
                    Cell::Empty
                } else {
                    Cell::Occupied
                };
            }
        }
        Board::from_cells(cells)
    }

    /// Every legal jump starting at `from`, in direction order.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Move> {
        if !self.cell(from).has_peg() {
            return Vec::new();
        }

        Direction::ALL
            .iter()
            .filter_map(|&dir| Move::in_direction(from, dir))
            .filter(|mv| self.cell(mv.over).has_peg() && self.cell(mv.to) == Cell::Empty)
            .collect()
    }

    /// Landing positions of every legal jump from `from`.
    ///
    /// An off-board, empty or out-of-range `from` has no destinations.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        self.legal_moves_from(from)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Every legal jump on the board.
    pub fn legal_moves(&self) -> Vec<Move> {
        Position::all()
            .flat_map(|pos| self.legal_moves_from(pos))
            .collect()
    }

    /// Whether `mv` is a legal jump on the current board.
    pub fn is_legal(&self, mv: &Move) -> bool {
        Move::between(mv.from, mv.to).as_ref() == Some(mv)
            && self.legal_destinations(mv.from).contains(&mv.to)
    }

    /// Apply a jump and return the new peg count.
    ///
    /// Illegal moves are rejected and leave the board untouched.
    pub fn apply(&mut self, mv: Move) -> Result<usize, PegError> {
        if !self.is_legal(&mv) {
            tracing::warn!(from = %mv.from, to = %mv.to, "rejected illegal move");
            return Err(PegError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        self.set(mv.from, Cell::Empty);
        self.set(mv.over, Cell::Empty);
        self.set(mv.to, Cell::Occupied);
        self.pegs -= 1;

        tracing::debug!(from = %mv.from, over = %mv.over, to = %mv.to, pegs = self.pegs, "applied move");
        Ok(self.pegs)
    }

    /// Whether any peg on the board can jump.
    pub fn any_legal_move_exists(&self) -> bool {
        Position::all().any(|pos| {
            self.cell(pos).has_peg() && !self.legal_destinations(pos).is_empty()
        })
    }

    /// Whether play has ended: one peg left, or no peg can jump.
    pub fn is_terminal(&self) -> bool {
        is_terminal(self.pegs, self)
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }
}

/// Termination check for a board with `peg_count` pegs.
///
/// A single peg can never jump, so that case skips the board scan.
pub fn is_terminal(peg_count: usize, board: &Board) -> bool {
    peg_count <= 1 || !board.any_legal_move_exists()
}
