//! Help dialog
//!
//! Keyboard shortcuts for the dashboard and the unlock modal

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Dashboard"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("Enter", "Click the badge: unlock this signal"),
        key_line("u", "Open the unlock dialog"),
        key_line("r", "Reload the signal feed"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        section("Unlock dialog"),
        Line::from(""),
        key_line("j/k Tab", "Move focus"),
        key_line("Space/Enter", "Toggle option / press button"),
        key_line("1-5", "Toggle option directly"),
        key_line("u", "Unlock selected"),
        key_line("Esc/x", "Close"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
