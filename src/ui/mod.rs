mod board_scene;
mod game_common;
mod help_scene;
mod level_select_scene;
mod stats_panel;

use pegsol::app::{App, Overlay};
use ratatui::Frame;

/// Draw the whole screen: the board scene, then the active overlay.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.size();
    board_scene::render_board_scene(frame, area, app);

    match app.overlay {
        Overlay::LevelSelect { selected } => {
            level_select_scene::render_level_select(frame, area, app, selected)
        }
        Overlay::Stats => stats_panel::draw_stats_panel(frame, area, app),
        Overlay::Help => help_scene::render_help(frame, area),
        // Drawn by the board scene over the grid
        Overlay::GameOver | Overlay::None => {}
    }
}
