//! UI-owned game state: cursor, selection, the move being animated and the
//! active overlay. Everything here queries the engine; none of it lives in
//! the engine.

mod input;

pub use input::{process_input, PegInput};

use crate::board::{Move, Position};
use crate::constants::{BOARD_SIZE, MOVE_ANIMATION_MS, SUSPENSE_MAX_PEGS};
use crate::error::PegError;
use crate::levels::LevelCatalog;
use crate::session::{GameResult, GameSession};
use crate::stats::GameStats;
use chrono::Utc;
use std::time::{Duration, Instant};

/// A jump that has been chosen but not yet committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub mv: Move,
    pub started: Instant,
}

impl PendingMove {
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= Duration::from_millis(MOVE_ANIMATION_MS)
    }
}

/// Overlay shown on top of the board. At most one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    GameOver,
    LevelSelect { selected: usize },
    Stats,
    Help,
}

/// Front-end application state.
#[derive(Debug)]
pub struct App {
    catalog: LevelCatalog,
    pub session: GameSession,
    pub stats: GameStats,
    pub cursor: Position,
    pub selected: Option<Position>,
    pub pending: Option<PendingMove>,
    pub overlay: Overlay,
    /// One-line message for the status bar (e.g. a newly unlocked level).
    pub notice: Option<String>,
    /// Stats changed since the last save.
    pub stats_dirty: bool,
    pub should_quit: bool,
}

impl App {
    /// Start on `level`, or on the highest unlocked level if `level` is
    /// still locked.
    pub fn new(catalog: LevelCatalog, stats: GameStats, level: usize) -> Result<Self, PegError> {
        let highest = stats.highest_unlocked_level(catalog.level_count());
        let start = level.clamp(1, highest);
        let session = GameSession::start(&catalog, start)?;
        let notice = if start == level {
            None
        } else if catalog.level_at(level).is_none() {
            Some(format!("There is no level {}", level))
        } else {
            Some(format!("Level {} is locked", level))
        };

        Ok(Self {
            catalog,
            session,
            stats,
            cursor: Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2),
            selected: None,
            pending: None,
            overlay: Overlay::None,
            notice,
            stats_dirty: false,
            should_quit: false,
        })
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn highest_unlocked_level(&self) -> usize {
        self.stats
            .highest_unlocked_level(self.catalog.level_count())
    }

    pub fn is_unlocked(&self, level: usize) -> bool {
        self.stats.is_unlocked(level, self.catalog.level_count())
    }

    /// Destinations for the selected peg.
    pub fn valid_moves(&self) -> Vec<Position> {
        match self.selected {
            Some(pos) => self.session.legal_destinations(pos),
            None => Vec::new(),
        }
    }

    /// Few pegs left and the game still running.
    pub fn is_suspense(&self) -> bool {
        let pegs = self.session.peg_count();
        !self.session.is_over() && pegs > 1 && pegs <= SUSPENSE_MAX_PEGS
    }

    pub fn result(&self) -> Option<GameResult> {
        self.session.result()
    }

    /// Whether a level exists after the current one and is unlocked.
    pub fn has_next_level(&self) -> bool {
        let next = self.session.level_id() + 1;
        self.catalog.level_at(next).is_some() && self.is_unlocked(next)
    }

    /// Move the cursor, clamping to the grid.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let max = BOARD_SIZE as i32 - 1;
        let row = (self.cursor.row as i32 + d_row).clamp(0, max) as usize;
        let col = (self.cursor.col as i32 + d_col).clamp(0, max) as usize;
        self.cursor = Position::new(row, col);
    }

    /// Start `level` if it exists and is unlocked. Returns whether it started.
    pub fn start_level(&mut self, level: usize) -> bool {
        if !self.is_unlocked(level) {
            self.notice = Some(format!("Level {} is locked", level));
            return false;
        }
        match GameSession::start(&self.catalog, level) {
            Ok(session) => {
                self.session = session;
                self.reset_ui();
                true
            }
            Err(e) => {
                tracing::warn!(level, error = %e, "cannot start level");
                false
            }
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.reset_ui();
    }

    pub fn next_level(&mut self) -> bool {
        if !self.has_next_level() {
            return false;
        }
        self.start_level(self.session.level_id() + 1)
    }

    /// Handle Select on the cursor cell: pick up a peg, drop the selection,
    /// or launch a jump to a legal destination.
    pub fn select_at_cursor(&mut self, now: Instant) {
        if self.session.is_over() || self.pending.is_some() {
            return;
        }

        let pos = self.cursor;
        let has_peg = self.session.board().cell(pos).has_peg();

        match self.selected {
            Some(sel) if sel == pos => self.selected = None,
            Some(sel) => {
                if !has_peg && self.valid_moves().contains(&pos) {
                    if let Some(mv) = Move::between(sel, pos) {
                        self.pending = Some(PendingMove { mv, started: now });
                    }
                    self.selected = None;
                } else if has_peg {
                    self.selected = Some(pos);
                } else {
                    self.selected = None;
                }
            }
            None => {
                if has_peg {
                    self.selected = Some(pos);
                }
            }
        }
    }

    /// Advance time: commit the pending jump once its animation is done.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.is_some_and(|p| p.is_due(now)) {
            self.commit_pending();
        }
    }

    /// Apply the pending jump right away.
    pub fn commit_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if let Err(e) = self.session.apply(pending.mv) {
            tracing::warn!(error = %e, "pending move no longer legal");
            return;
        }

        if let Some(result) = self.session.result() {
            self.record_result(result);
        }
    }

    fn record_result(&mut self, result: GameResult) {
        let before = self.highest_unlocked_level();
        self.stats
            .record_game(self.session.level_id(), result.pegs_left, Utc::now().timestamp());
        self.stats_dirty = true;
        self.overlay = Overlay::GameOver;

        let after = self.highest_unlocked_level();
        if after > before {
            tracing::info!(level = after, "level unlocked");
            self.notice = Some(format!("Level {} unlocked!", after));
        }
    }

    fn reset_ui(&mut self) {
        self.selected = None;
        self.pending = None;
        self.overlay = Overlay::None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app() -> App {
        App::new(LevelCatalog::builtin().unwrap(), GameStats::default(), 1).unwrap()
    }

    fn later(now: Instant) -> Instant {
        now + Duration::from_millis(MOVE_ANIMATION_MS)
    }

    #[test]
    fn test_new_app_starts_centered() {
        let app = new_app();
        assert_eq!(app.cursor, Position::new(3, 3));
        assert_eq!(app.session.level_id(), 1);
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_locked_start_level_falls_back() {
        let app = App::new(LevelCatalog::builtin().unwrap(), GameStats::default(), 4).unwrap();
        assert_eq!(app.session.level_id(), 1);
        assert_eq!(app.notice.as_deref(), Some("Level 4 is locked"));
    }

    #[test]
    fn test_cursor_clamped() {
        let mut app = new_app();
        app.cursor = Position::new(0, 0);
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, Position::new(0, 0));
        app.cursor = Position::new(6, 6);
        app.move_cursor(1, 1);
        assert_eq!(app.cursor, Position::new(6, 6));
    }

    #[test]
    fn test_select_deselect_and_reselect() {
        let mut app = new_app();
        let now = Instant::now();

        app.cursor = Position::new(3, 1);
        app.select_at_cursor(now);
        assert_eq!(app.selected, Some(Position::new(3, 1)));
        assert_eq!(app.valid_moves(), vec![Position::new(3, 3)]);

        // Selecting another peg switches the selection
        app.cursor = Position::new(1, 3);
        app.select_at_cursor(now);
        assert_eq!(app.selected, Some(Position::new(1, 3)));

        // Selecting the same peg again drops it
        app.select_at_cursor(now);
        assert_eq!(app.selected, None);

        // Empty cell with nothing selected does nothing
        app.cursor = Position::new(3, 3);
        app.select_at_cursor(now);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_selecting_off_board_clears_selection() {
        let mut app = new_app();
        let now = Instant::now();
        app.cursor = Position::new(3, 1);
        app.select_at_cursor(now);
        app.cursor = Position::new(0, 0);
        app.select_at_cursor(now);
        assert_eq!(app.selected, None);
        assert!(app.pending.is_none());
    }

    #[test]
    fn test_move_commits_after_animation() {
        let mut app = new_app();
        let now = Instant::now();

        app.cursor = Position::new(3, 1);
        app.select_at_cursor(now);
        app.cursor = Position::new(3, 3);
        app.select_at_cursor(now);

        let pending = app.pending.unwrap();
        assert_eq!(pending.mv.over, Position::new(3, 2));
        assert_eq!(app.selected, None);

        // Not yet due
        app.tick(now);
        assert_eq!(app.session.peg_count(), 32);

        // Board input is ignored while the jump is in flight
        app.cursor = Position::new(1, 3);
        app.select_at_cursor(now);
        assert_eq!(app.selected, None);

        app.tick(later(now));
        assert!(app.pending.is_none());
        assert_eq!(app.session.peg_count(), 31);
        assert!(!app.stats_dirty);
    }

    #[test]
    fn test_start_level_respects_unlocks() {
        let mut app = new_app();
        assert!(!app.start_level(2));
        assert_eq!(app.session.level_id(), 1);

        app.stats.record_game(1, 3, 0);
        assert!(app.start_level(2));
        assert_eq!(app.session.level_id(), 2);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_game_over_records_stats_once() {
        let mut app = new_app();
        while !app.session.is_over() {
            let mv = app.session.board().legal_moves()[0];
            app.pending = Some(PendingMove {
                mv,
                started: Instant::now(),
            });
            app.commit_pending();
        }

        assert_eq!(app.overlay, Overlay::GameOver);
        assert!(app.stats_dirty);
        assert_eq!(app.stats.games_played, 1);

        let result = app.result().unwrap();
        assert_eq!(app.stats.tiers_for(1), vec![result.tier]);
        assert!(!app.is_suspense());

        // Nothing further can be played or recorded
        app.commit_pending();
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn test_restart_clears_ui_state() {
        let mut app = new_app();
        app.cursor = Position::new(3, 1);
        app.select_at_cursor(Instant::now());
        app.overlay = Overlay::Help;

        app.restart();
        assert!(app.selected.is_none());
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.session.peg_count(), 32);
    }

    #[test]
    fn test_next_level_needs_unlock() {
        let mut app = new_app();
        assert!(!app.has_next_level());
        assert!(!app.next_level());

        app.stats.record_game(1, 2, 0);
        assert!(app.has_next_level());
        assert!(app.next_level());
        assert_eq!(app.session.level_id(), 2);
    }
}
