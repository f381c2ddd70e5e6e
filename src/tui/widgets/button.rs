//! Button widget
//!
//! A filled, centered call-to-action. Disabled buttons render greyed out;
//! the owner is responsible for ignoring presses while disabled.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};

#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            focused: false,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style(&self) -> Style {
        let style = if self.enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };

        if self.focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let style = self.style();
        buf.set_style(area, style);

        // Label on the middle row of the filled area
        let label_row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        let text = if self.focused {
            format!("› {} ‹", self.label)
        } else {
            self.label.to_string()
        };

        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .render(label_row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_button_is_grey() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        Button::new("Go").enabled(false).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, Color::DarkGray);
    }

    #[test]
    fn test_enabled_button_label_centered() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        Button::new("Go").render(area, &mut buf);

        let middle: String = (0..20).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(middle.trim(), "Go");
        assert_eq!(buf[(0, 0)].bg, Color::Cyan);
    }
}
