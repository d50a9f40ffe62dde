//! Board scene: the 7×7 grid, the info panel and the status bar.

use super::game_common::{
    create_game_layout, label_line, render_game_over_overlay, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use pegsol::app::{App, Overlay};
use pegsol::board::{Cell, Position};
use pegsol::constants::BOARD_SIZE;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Each cell is 4 chars wide and 1 tall, with a spacer row between rows.
const CELL_WIDTH: u16 = 4;
const ROW_STRIDE: u16 = 2;
const INFO_PANEL_WIDTH: u16 = 26;

/// How a cell should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellRole {
    Plain,
    Selected,
    Destination,
    /// Peg leaving its hole during the jump animation.
    Leaving,
    /// Peg being jumped over.
    Jumped,
    /// Hole the jumping peg lands in.
    Landing,
}

/// Render the board scene, with the game over overlay over the board
/// area when it is active.
pub fn render_board_scene(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Peg Solitaire - Level {}: {} ",
        app.session.level_id(),
        app.session.level().name()
    );
    let border_color = if app.is_suspense() {
        Color::Red
    } else {
        Color::Yellow
    };
    let layout = create_game_layout(
        frame,
        area,
        &title,
        border_color,
        BOARD_SIZE as u16 * ROW_STRIDE,
        INFO_PANEL_WIDTH,
    );

    render_grid(frame, layout.content, app);
    render_status(frame, layout.status_bar, app);
    render_info_panel(frame, layout.info_panel, app);

    if app.overlay == Overlay::GameOver {
        render_result(frame, layout.content, app);
    }
}

fn cell_role(app: &App, pos: Position, destinations: &[Position]) -> CellRole {
    if let Some(pending) = app.pending {
        if pending.mv.from == pos {
            return CellRole::Leaving;
        }
        if pending.mv.over == pos {
            return CellRole::Jumped;
        }
        if pending.mv.to == pos {
            return CellRole::Landing;
        }
    }
    if app.selected == Some(pos) {
        CellRole::Selected
    } else if destinations.contains(&pos) {
        CellRole::Destination
    } else {
        CellRole::Plain
    }
}

/// Display text and style for one cell.
fn cell_display(cell: Cell, role: CellRole, suspense: bool) -> (&'static str, Style) {
    match (cell, role) {
        (Cell::OffBoard, _) => ("    ", Style::default()),
        (_, CellRole::Selected) => (
            " ●  ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        (_, CellRole::Destination) => (
            " ◎  ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (_, CellRole::Leaving) => (" ·  ", Style::default().fg(Color::Cyan)),
        (_, CellRole::Jumped) => (
            " ✕  ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        (_, CellRole::Landing) => (
            " ●  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        (Cell::Occupied, CellRole::Plain) => (" ●  ", Style::default().fg(Color::White)),
        (Cell::Empty, CellRole::Plain) if suspense => (" ·  ", Style::default().fg(Color::Red)),
        (Cell::Empty, CellRole::Plain) => (" ·  ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_grid(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.session.board();
    let destinations = app.valid_moves();
    let suspense = app.is_suspense();
    let board_active = app.overlay == Overlay::None && !app.session.is_over();

    let grid_width = BOARD_SIZE as u16 * CELL_WIDTH;
    let grid_height = BOARD_SIZE as u16 * ROW_STRIDE - 1;
    let x_offset = area.x + (area.width.saturating_sub(grid_width)) / 2;
    let y_offset = area.y + (area.height.saturating_sub(grid_height)) / 2;

    for row in 0..BOARD_SIZE {
        let y = y_offset + row as u16 * ROW_STRIDE;
        if y >= area.y + area.height {
            break;
        }

        let mut spans = Vec::with_capacity(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let role = cell_role(app, pos, &destinations);
            let (text, mut style) = cell_display(board.cell(pos), role, suspense);
            if board_active && app.cursor == pos {
                style = style.bg(Color::DarkGray);
            }
            spans.push(Span::styled(text, style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y, grid_width.min(area.width), 1),
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = if let Some(notice) = &app.notice {
        (notice.clone(), Color::Cyan)
    } else if let Some(result) = app.result() {
        (
            format!("Game over: {} ({} pegs left)", result.tier.label(), result.pegs_left),
            GameResultType::from_tier(result.tier).color(),
        )
    } else if app.pending.is_some() {
        ("Jumping...".to_string(), Color::Cyan)
    } else if app.selected.is_some() {
        ("Choose where to jump".to_string(), Color::Yellow)
    } else if app.is_suspense() {
        ("Only a few pegs left...".to_string(), Color::Red)
    } else {
        ("Select a peg to move".to_string(), Color::White)
    };

    let controls: &[(&str, &str)] = if app.session.is_over() {
        &[
            ("[Enter]", "Result"),
            ("[R]", "Restart"),
            ("[N]", "Next"),
            ("[L]", "Levels"),
            ("[Q]", "Quit"),
        ]
    } else {
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Select"),
            ("[R]", "Restart"),
            ("[L]", "Levels"),
            ("[H]", "Help"),
            ("[Q]", "Quit"),
        ]
    };

    render_status_bar(frame, area, &text, color, controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let inner = render_info_panel_frame(frame, area);
    let session = &app.session;
    let level_id = session.level_id();

    let mut lines = vec![
        Line::from(Span::styled(
            session.level().name(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label_line(
            "Level",
            format!("{} / {}", level_id, app.catalog().level_count()),
            Color::White,
        ),
        label_line(
            "Pegs",
            format!("{} / {}", session.peg_count(), session.starting_pegs()),
            Color::White,
        ),
        label_line("Moves", session.moves().len().to_string(), Color::White),
    ];

    if let Some(tier) = app.stats.best_tier(level_id) {
        lines.push(label_line("Best", tier.label().to_string(), Color::Cyan));
    }

    if let Some(result) = app.result() {
        lines.push(Line::from(""));
        lines.push(label_line("Score", result.score.to_string(), Color::Cyan));
        lines.push(label_line(
            "Rating",
            result.tier.label().to_string(),
            GameResultType::from_tier(result.tier).color(),
        ));
    } else if app.is_suspense() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Suspense!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "● peg  · hole",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "◎ legal jump",
        Style::default().fg(Color::Green),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result() else {
        return;
    };

    let title = format!("{}!", result.tier.label().to_uppercase());
    let message = format!(
        "{} pegs left. {}",
        result.pegs_left,
        result.tier.description()
    );
    let reward = if result.is_good() {
        format!("Score: {} - well played", result.score)
    } else {
        format!("Score: {}", result.score)
    };

    let controls: &[(&str, &str)] = if app.has_next_level() {
        &[
            ("[R]", "Restart"),
            ("[N]", "Next level"),
            ("[L]", "Levels"),
            ("[Esc]", "Board"),
        ]
    } else {
        &[("[R]", "Restart"), ("[L]", "Levels"), ("[Esc]", "Board")]
    };

    render_game_over_overlay(
        frame,
        area,
        GameResultType::from_tier(result.tier),
        &title,
        &message,
        &reward,
        controls,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pegsol::app::PendingMove;
    use pegsol::board::Move;
    use pegsol::levels::LevelCatalog;
    use pegsol::stats::GameStats;
    use std::time::Instant;

    fn new_app() -> App {
        App::new(LevelCatalog::builtin().unwrap(), GameStats::default(), 1).unwrap()
    }

    #[test]
    fn test_cell_roles_during_jump() {
        let mut app = new_app();
        let mv = Move::between(Position::new(3, 1), Position::new(3, 3)).unwrap();
        app.pending = Some(PendingMove {
            mv,
            started: Instant::now(),
        });

        assert_eq!(cell_role(&app, mv.from, &[]), CellRole::Leaving);
        assert_eq!(cell_role(&app, mv.over, &[]), CellRole::Jumped);
        assert_eq!(cell_role(&app, mv.to, &[]), CellRole::Landing);
        assert_eq!(
            cell_role(&app, Position::new(1, 3), &[]),
            CellRole::Plain
        );
    }

    #[test]
    fn test_cell_roles_for_selection() {
        let mut app = new_app();
        app.selected = Some(Position::new(3, 1));
        let destinations = app.valid_moves();

        assert_eq!(
            cell_role(&app, Position::new(3, 1), &destinations),
            CellRole::Selected
        );
        assert_eq!(
            cell_role(&app, Position::new(3, 3), &destinations),
            CellRole::Destination
        );
    }

    #[test]
    fn test_suspense_only_recolours_empty_holes() {
        let (_, calm) = cell_display(Cell::Empty, CellRole::Plain, false);
        let (_, tense) = cell_display(Cell::Empty, CellRole::Plain, true);
        assert_ne!(calm, tense);

        let (_, peg) = cell_display(Cell::Occupied, CellRole::Plain, false);
        let (_, peg_tense) = cell_display(Cell::Occupied, CellRole::Plain, true);
        assert_eq!(peg, peg_tense);

        let (text, _) = cell_display(Cell::OffBoard, CellRole::Plain, true);
        assert_eq!(text.trim(), "");
    }
}
