//! Status bar view
//!
//! Shows unlock progress and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::SignalBoard;

/// Render the status bar
pub fn render(frame: &mut Frame, board: &SignalBoard, area: Rect) {
    let unlocked = board.unlocked_count();
    let total = board.signals.len();

    let mut spans = vec![
        Span::styled(" Unlocked: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{}/{}", unlocked, total),
            Style::default()
                .fg(if unlocked == total && total > 0 {
                    Color::Green
                } else {
                    Color::Yellow
                })
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(signal) = board.selected_signal() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            format!("{} ({})", signal.id, signal.strength),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = " Enter:Unlock  u:Upgrade  ?:Help  q:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
