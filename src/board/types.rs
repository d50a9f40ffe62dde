//! Board data structures: cells, positions, moves.

use crate::constants::BOARD_SIZE;
use std::fmt;

/// State of a single cell on the 7×7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Not part of the playable shape; no hole exists here.
    #[default]
    OffBoard,
    /// A hole without a peg.
    Empty,
    /// A hole holding a peg.
    Occupied,
}

impl Cell {
    /// Whether a hole exists at this cell (empty or occupied).
    pub fn is_hole(self) -> bool {
        !matches!(self, Cell::OffBoard)
    }

    pub fn has_peg(self) -> bool {
        matches!(self, Cell::Occupied)
    }
}

/// A (row, col) address on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies inside the 7×7 grid.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Shift by a signed delta. Returns None if the result leaves the grid.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Position> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Iterate over every position of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal jump directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed order in which jumps are checked.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit (d_row, d_col) step for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A single jump: the peg at `from` jumps over `over` and lands on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub over: Position,
    pub to: Position,
}

impl Move {
    /// The jump from `from` in `direction`, if it stays on the grid.
    pub fn in_direction(from: Position, direction: Direction) -> Option<Move> {
        let (d_row, d_col) = direction.delta();
        let over = from.offset(d_row, d_col)?;
        let to = from.offset(d_row * 2, d_col * 2)?;
        Some(Move { from, over, to })
    }

    /// The jump connecting `from` and `to`, if they are exactly two cells
    /// apart along a row or column.
    pub fn between(from: Position, to: Position) -> Option<Move> {
        if !from.in_bounds() || !to.in_bounds() {
            return None;
        }
        let d_row = to.row as i32 - from.row as i32;
        let d_col = to.col as i32 - from.col as i32;
        let orthogonal_two = (d_row.abs() == 2 && d_col == 0) || (d_row == 0 && d_col.abs() == 2);
        if !orthogonal_two {
            return None;
        }
        let over = from.offset(d_row / 2, d_col / 2)?;
        Some(Move { from, over, to })
    }
}

/// A 7×7 peg solitaire board with a cached peg count.
///
/// The hole layout is fixed once the board is built; only the
/// Empty/Occupied state of holes changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(super) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub(super) pegs: usize,
}

impl Board {
    /// Build a board directly from a cell grid. The peg count is derived.
    ///
    /// Sessions start from [`Board::initialize`]; this exists for analysing
    /// arbitrary positions.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let pegs = cells.iter().flatten().filter(|c| c.has_peg()).count();
        Self { cells, pegs }
    }

    /// The cell at `pos`. Positions outside the grid read as off-board.
    pub fn cell(&self, pos: Position) -> Cell {
        if pos.in_bounds() {
            self.cells[pos.row][pos.col]
        } else {
            Cell::OffBoard
        }
    }

    /// Number of pegs currently on the board.
    pub fn peg_count(&self) -> usize {
        self.pegs
    }

    /// Number of holes (occupied or empty) in the layout.
    pub fn hole_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_hole()).count()
    }

    /// Whether `other` has exactly the same hole layout.
    pub fn same_shape(&self, other: &Board) -> bool {
        Position::all().all(|p| self.cell(p).is_hole() == other.cell(p).is_hole())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::OffBoard => ' ',
                    Cell::Empty => '.',
                    Cell::Occupied => 'o',
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
