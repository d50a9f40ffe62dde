//! Level select overlay.

use super::game_common::{render_modal_frame, render_status_bar};
use pegsol::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const MODAL_WIDTH: u16 = 50;

/// Render the level list with lock markers and the best tier per level.
pub fn render_level_select(frame: &mut Frame, area: Rect, app: &App, selected: usize) {
    let count = app.catalog().level_count() as u16;
    let inner = render_modal_frame(
        frame,
        area,
        MODAL_WIDTH,
        count + 6,
        " Select Level ",
        Color::Yellow,
    );

    let mut lines = vec![Line::from("")];
    for level in app.catalog().iter() {
        let id = level.id();
        let unlocked = app.is_unlocked(id);
        let is_selected = id == selected;

        let marker = if is_selected { "> " } else { "  " };
        let name_style = match (unlocked, is_selected) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White),
        };
        let badge = if !unlocked {
            Span::styled("locked", Style::default().fg(Color::Red))
        } else if let Some(tier) = app.stats.best_tier(id) {
            Span::styled(tier.label(), Style::default().fg(Color::Cyan))
        } else {
            Span::styled("-", Style::default().fg(Color::DarkGray))
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}. {:<20}", id, level.name()), name_style),
            Span::styled(
                format!("{:>3} pegs  ", level.starting_pegs()),
                Style::default().fg(Color::DarkGray),
            ),
            badge,
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    let status = app
        .notice
        .clone()
        .unwrap_or_else(|| "Reach Cunning or better to unlock the next level".to_string());
    let status_area = Rect {
        y: inner.y + inner.height.saturating_sub(2),
        height: inner.height.min(2),
        ..inner
    };
    render_status_bar(
        frame,
        status_area,
        &status,
        Color::DarkGray,
        &[("[↑↓]", "Choose"), ("[Enter]", "Play"), ("[Esc]", "Back")],
    );
}
