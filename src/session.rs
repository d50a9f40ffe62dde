//! A single playthrough of one level.

use crate::board::{Board, Move, Position};
use crate::error::PegError;
use crate::levels::{Level, LevelCatalog};
use crate::scoring::{self, RatingTier};

/// Final result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub pegs_left: usize,
    pub score: u32,
    pub tier: RatingTier,
}

impl GameResult {
    pub fn from_pegs(pegs_left: usize) -> Self {
        Self {
            pegs_left,
            score: scoring::score(pegs_left),
            tier: scoring::rating_tier(pegs_left),
        }
    }

    /// Whether the finish counts as good (cunning or better).
    pub fn is_good(&self) -> bool {
        scoring::is_good_score(self.score)
    }
}

/// Mutable per-playthrough state: the board, the level being played and
/// the result once the game has ended.
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    board: Board,
    /// Peg count recorded when the level was laid out.
    starting_pegs: usize,
    moves: Vec<Move>,
    result: Option<GameResult>,
}

impl GameSession {
    /// Start the level at 1-based `index` in `catalog`.
    pub fn start(catalog: &LevelCatalog, index: usize) -> Result<Self, PegError> {
        let level = catalog
            .level_at(index)
            .ok_or(PegError::LevelNotFound(index))?;
        Ok(Self::new(level))
    }

    pub fn new(level: &Level) -> Self {
        let board = Board::initialize(level);
        let starting_pegs = board.peg_count();
        tracing::info!(level = level.id(), name = level.name(), pegs = starting_pegs, "level started");

        Self {
            level: level.clone(),
            board,
            starting_pegs,
            moves: Vec::new(),
            result: None,
        }
    }

    /// Lay the current level out again from scratch.
    pub fn restart(&mut self) {
        *self = Self::new(&self.level);
    }

    /// Jump the peg at `from` into `to`. Returns the new peg count.
    pub fn play(&mut self, from: Position, to: Position) -> Result<usize, PegError> {
        let mv = Move::between(from, to).ok_or(PegError::IllegalMove { from, to })?;
        self.apply(mv)
    }

    /// Apply a jump and check whether the game has ended.
    pub fn apply(&mut self, mv: Move) -> Result<usize, PegError> {
        if self.result.is_some() {
            return Err(PegError::GameOver);
        }

        let pegs = self.board.apply(mv)?;
        self.moves.push(mv);

        if pegs < self.starting_pegs && self.board.is_terminal() {
            let result = GameResult::from_pegs(pegs);
            tracing::info!(
                level = self.level.id(),
                pegs_left = pegs,
                score = result.score,
                tier = result.tier.id(),
                "game over"
            );
            self.result = Some(result);
        }

        Ok(pegs)
    }

    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        if self.result.is_some() {
            return Vec::new();
        }
        self.board.legal_destinations(from)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_id(&self) -> usize {
        self.level.id()
    }

    pub fn peg_count(&self) -> usize {
        self.board.peg_count()
    }

    pub fn starting_pegs(&self) -> usize {
        self.starting_pegs
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}
