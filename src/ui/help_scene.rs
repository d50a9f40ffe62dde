//! Rules and key bindings overlay.

use super::game_common::render_modal_frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const RULES: &[&str] = &[
    "Jump a peg over a neighbouring peg into an empty hole",
    "directly beyond it, up, down, left or right. The jumped",
    "peg is removed. The game ends when no jump is left.",
    "Finish with as few pegs as possible: one is perfect.",
];

const KEYS: &[(&str, &str)] = &[
    ("Arrows", "Move the cursor"),
    ("Enter/Space", "Pick up a peg / jump"),
    ("Esc", "Drop the selected peg"),
    ("R", "Restart the level"),
    ("N", "Next level (after a game)"),
    ("L", "Level select"),
    ("S", "Statistics"),
    ("H / ?", "This help"),
    ("Q", "Quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect) {
    let height = (RULES.len() + KEYS.len() + 7) as u16;
    let inner = render_modal_frame(frame, area, 62, height, " How to Play ", Color::Green);

    let heading = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Rules", heading))];
    lines.extend(
        RULES
            .iter()
            .map(|rule| Line::from(Span::styled(*rule, Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Keys", heading)));
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", key), Style::default().fg(Color::Yellow)),
            Span::styled(*action, Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key]",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
