//! Lifetime statistics overlay.

use super::game_common::{label_line, render_modal_frame};
use chrono::{Local, TimeZone};
use pegsol::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draws the stats overlay: totals, then the best tier per level.
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, app: &App) {
    let stats = &app.stats;
    let level_count = app.catalog().level_count() as u16;
    let inner = render_modal_frame(
        frame,
        area,
        46,
        level_count + 14,
        " Statistics ",
        Color::Cyan,
    );

    let mut lines = vec![
        label_line("Games played", stats.games_played.to_string(), Color::White),
        label_line(
            "Games won",
            format!("{} ({:.0}%)", stats.games_won, stats.win_rate() * 100.0),
            Color::Green,
        ),
        label_line("High score", stats.high_score.to_string(), Color::Yellow),
        label_line(
            "Average score",
            format!("{:.1}", stats.average_score()),
            Color::White,
        ),
        label_line("Total score", stats.total_score.to_string(), Color::White),
        label_line("Last played", format_last_played(stats.last_played), Color::White),
        Line::from(""),
        Line::from(Span::styled(
            "Best rating per level",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for level in app.catalog().iter() {
        let best = match stats.best_tier(level.id()) {
            Some(tier) => tier.label().to_string(),
            None if app.is_unlocked(level.id()) => "not finished".to_string(),
            None => "locked".to_string(),
        };
        lines.push(label_line(
            &format!("{}. {}", level.id(), level.name()),
            best,
            Color::White,
        ));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "[Press any key]",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

fn format_last_played(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| Local.timestamp_opt(ts, 0).single())
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_last_played_never() {
        assert_eq!(format_last_played(None), "never");
    }

    #[test]
    fn test_format_last_played_date() {
        let formatted = format_last_played(Some(1_700_000_000));
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert!(formatted.starts_with("2023-11-1"));
    }
}
