//! Signal table view
//!
//! Lists the feed with a strength badge per row. Locked rows hide the company.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::SignalStrength;
use crate::tui::app::SignalBoard;

fn badge_style(strength: SignalStrength) -> Style {
    let color = match strength {
        SignalStrength::SuperStrong => Color::Magenta,
        SignalStrength::VeryStrong => Color::Cyan,
        SignalStrength::Strong => Color::Green,
        SignalStrength::Moderate => Color::Gray,
    };
    Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
}

/// Render the header line
pub fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " Intent Signal ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("buying intent by company", Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Render the signal table
pub fn render(frame: &mut Frame, board: &SignalBoard, area: Rect) {
    let block = Block::default()
        .title(" Signals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if board.signals.is_empty() {
        let text = Paragraph::new("No signals. Run 'intent-signal init' to load the sample feed.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let mask = board.settings().mask_locked_companies;

    let header = Row::new(vec![
        Cell::from("Badge").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Company").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Topic").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = board
        .signals
        .iter()
        .map(|signal| {
            let status = if signal.unlocked {
                Cell::from("Unlocked").style(Style::default().fg(Color::Green))
            } else {
                Cell::from("Locked").style(Style::default().fg(Color::DarkGray))
            };

            Row::new(vec![
                Cell::from(Span::styled(
                    format!(" {} ", signal.strength.badge()),
                    badge_style(signal.strength),
                )),
                Cell::from(signal.display_company(mask)),
                Cell::from(signal.topic.clone()),
                status,
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(9),
        Constraint::Min(20),
        Constraint::Min(20),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(board.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
