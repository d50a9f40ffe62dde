//! Input dispatch for the game screen.

use super::{App, Overlay};
use std::time::Instant;

/// Input actions for the game (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegInput {
    Up,
    Down,
    Left,
    Right,
    Select,      // Enter/Space - pick up a peg or jump
    Cancel,      // Esc - clear selection or close overlay
    Restart,     // R
    NextLevel,   // N
    LevelSelect, // L
    Stats,       // S
    Help,        // H / ?
    Quit,        // Q
    Other,
}

/// Process one input. Overlays take priority over the board.
/// Returns true if the input changed anything.
pub fn process_input(app: &mut App, input: PegInput, now: Instant) -> bool {
    if input == PegInput::Quit {
        app.should_quit = true;
        return true;
    }

    match app.overlay {
        Overlay::Help | Overlay::Stats => {
            app.overlay = Overlay::None;
            true
        }
        Overlay::LevelSelect { selected } => process_level_select(app, input, selected),
        Overlay::GameOver => process_game_over(app, input),
        Overlay::None => process_board(app, input, now),
    }
}

fn process_level_select(app: &mut App, input: PegInput, selected: usize) -> bool {
    let count = app.catalog().level_count();
    match input {
        PegInput::Up => {
            app.overlay = Overlay::LevelSelect {
                selected: selected.saturating_sub(1).max(1),
            };
        }
        PegInput::Down => {
            app.overlay = Overlay::LevelSelect {
                selected: (selected + 1).min(count),
            };
        }
        PegInput::Select => {
            // Stays open on a locked level; start_level sets the notice
            app.start_level(selected);
        }
        PegInput::Cancel | PegInput::LevelSelect => {
            app.overlay = Overlay::None;
        }
        _ => return false,
    }
    true
}

fn process_game_over(app: &mut App, input: PegInput) -> bool {
    match input {
        PegInput::Select | PegInput::Restart => app.restart(),
        PegInput::NextLevel => {
            if !app.next_level() {
                return false;
            }
        }
        PegInput::LevelSelect => open_level_select(app),
        PegInput::Stats => app.overlay = Overlay::Stats,
        // Dismiss to look at the final board
        PegInput::Cancel => app.overlay = Overlay::None,
        _ => return false,
    }
    true
}

fn process_board(app: &mut App, input: PegInput, now: Instant) -> bool {
    match input {
        PegInput::Up => app.move_cursor(-1, 0),
        PegInput::Down => app.move_cursor(1, 0),
        PegInput::Left => app.move_cursor(0, -1),
        PegInput::Right => app.move_cursor(0, 1),
        PegInput::Select => {
            if app.session.is_over() {
                app.overlay = Overlay::GameOver;
            } else {
                app.select_at_cursor(now);
            }
        }
        PegInput::Cancel => app.selected = None,
        PegInput::Restart => app.restart(),
        PegInput::NextLevel => {
            if !app.session.is_over() || !app.next_level() {
                return false;
            }
        }
        PegInput::LevelSelect => open_level_select(app),
        PegInput::Stats => app.overlay = Overlay::Stats,
        PegInput::Help => app.overlay = Overlay::Help,
        PegInput::Quit | PegInput::Other => return false,
    }
    true
}

fn open_level_select(app: &mut App) {
    app.overlay = Overlay::LevelSelect {
        selected: app.session.level_id(),
    };
}
