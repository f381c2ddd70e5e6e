//! Checkbox widget
//!
//! A single `[x] label` row. Holds presentation only; the owner decides what
//! toggling means.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A labelled checkbox row
#[derive(Debug, Clone, Default)]
pub struct Checkbox<'a> {
    label: &'a str,
    checked: bool,
    focused: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Box glyph for the current state
    pub fn marker(&self) -> &'static str {
        if self.checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let box_style = if self.checked {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let label_style = if self.focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let line = Line::from(vec![
            Span::raw(if self.focused { "▶ " } else { "  " }),
            Span::styled(self.marker(), box_style),
            Span::raw(" "),
            Span::styled(self.label, label_style),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
