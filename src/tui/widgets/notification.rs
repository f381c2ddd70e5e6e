//! Toast notifications
//!
//! Short-lived messages the host shows after an unlock or a failure.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " Info ",
            Self::Success => " Unlocked ",
            Self::Error => " Error ",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error).with_ttl(Duration::from_secs(6))
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// FIFO of pending notifications; the head is the one on screen
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Drop the head once it has been shown long enough
    pub fn tick(&mut self) {
        if self.items.first().is_some_and(Notification::is_expired) {
            self.items.remove(0);
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.kind.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.kind.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("first"));
        queue.push(Notification::success("second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "first");
    }

    #[test]
    fn test_tick_drops_expired_head() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("gone").with_ttl(Duration::ZERO));
        queue.push(Notification::info("stays"));

        queue.tick();

        assert_eq!(queue.current().unwrap().message, "stays");
        queue.tick();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_kind_colors() {
        assert_eq!(NotificationKind::Success.color(), Color::Green);
        assert_eq!(NotificationKind::Error.color(), Color::Red);
    }
}
