//! Level layouts and the validated level catalog.

use crate::board::{Board, Position};
use crate::constants::BOARD_SIZE;
use crate::error::LevelError;
use std::collections::VecDeque;

/// Raw level definition (static data).
///
/// `layout` has one string per row: `o` marks a hole, `.` marks a cell
/// outside the playable shape.
pub struct LevelDef {
    pub name: &'static str,
    pub layout: &'static [&'static str],
    /// The single hole that starts without a peg.
    pub start: (usize, usize),
}

/// A validated level: a connected hole layout with one start hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    id: usize,
    name: &'static str,
    holes: [[bool; BOARD_SIZE]; BOARD_SIZE],
    start: Position,
}

impl Level {
    /// Parse and validate a level definition. `id` is the 1-based level
    /// number used in error messages and stats.
    pub fn parse(id: usize, def: &LevelDef) -> Result<Level, LevelError> {
        let mut holes = [[false; BOARD_SIZE]; BOARD_SIZE];

        if def.layout.len() != BOARD_SIZE {
            return Err(LevelError::RowCount {
                level: id,
                found: def.layout.len(),
            });
        }

        for (row, line) in def.layout.iter().enumerate() {
            let width = line.chars().count();
            if width != BOARD_SIZE {
                return Err(LevelError::RowWidth {
                    level: id,
                    row,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                holes[row][col] = match ch {
                    'o' => true,
                    '.' => false,
                    other => {
                        return Err(LevelError::UnknownCell {
                            level: id,
                            ch: other,
                            position: Position::new(row, col),
                        })
                    }
                };
            }
        }

        let start = Position::new(def.start.0, def.start.1);
        if !start.in_bounds() || !holes[start.row][start.col] {
            return Err(LevelError::StartOffBoard {
                level: id,
                position: start,
            });
        }

        let level = Level {
            id,
            name: def.name,
            holes,
            start,
        };

        let hole_count = level.hole_count();
        if hole_count < 2 {
            return Err(LevelError::TooFewHoles {
                level: id,
                holes: hole_count,
            });
        }
        if level.reachable_holes() != hole_count {
            return Err(LevelError::Disconnected { level: id });
        }
        if Board::initialize(&level).is_terminal() {
            return Err(LevelError::NoOpeningMove { level: id });
        }

        Ok(level)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn is_hole(&self, pos: Position) -> bool {
        pos.in_bounds() && self.holes[pos.row][pos.col]
    }

    pub fn hole_count(&self) -> usize {
        self.holes.iter().flatten().filter(|&&h| h).count()
    }

    /// Pegs on the board when the level starts.
    pub fn starting_pegs(&self) -> usize {
        self.hole_count() - 1
    }

    /// Holes reachable from the start hole through orthogonal neighbours.
    fn reachable_holes(&self) -> usize {
        let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut queue = VecDeque::from([self.start]);
        seen[self.start.row][self.start.col] = true;
        let mut count = 0;

        while let Some(pos) = queue.pop_front() {
            count += 1;
            for (d_row, d_col) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(next) = pos.offset(d_row, d_col) {
                    if self.is_hole(next) && !seen[next.row][next.col] {
                        seen[next.row][next.col] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        count
    }
}

/// The ordered set of playable levels, validated once at load.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Load the built-in levels. Fails on the first malformed definition.
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_defs(super::data::LEVELS)
    }

    /// Build a catalog from definitions, numbering them from 1.
    pub fn from_defs(defs: &[LevelDef]) -> Result<Self, LevelError> {
        let levels = defs
            .iter()
            .enumerate()
            .map(|(i, def)| Level::parse(i + 1, def))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { levels })
    }

    /// Level by 1-based index. None past the last level.
    pub fn level_at(&self, index: usize) -> Option<&Level> {
        index.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
