//! Unlock Intent Signal modal
//!
//! Upsell dialog offering the five unlock tiers as checkboxes. The modal owns
//! only its selection and keyboard focus. Visibility belongs to the host,
//! which also decides what an unlock means; both are reached through
//! [`UnlockSignalHost`].
//!
//! Lifecycle of the selection:
//! - empty when the modal is created,
//! - changed by checkbox toggles,
//! - cleared when the dialog is dismissed, when an unlock is confirmed, and
//!   when the host closes the dialog on its own (see [`UnlockIntentSignalModal::sync_open`]).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{SelectionState, UnlockOptionId, UNLOCK_OPTIONS};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Button, Checkbox};

const DIALOG_WIDTH: u16 = 110;
const DIALOG_HEIGHT: u16 = 24;

const DESCRIPTION: &str = "Unlock advanced AI automation. Boost your productivity, streamline \
                           your tasks, and stay ahead of the competition. Experience the \
                           future of efficiency today.";

/// Callbacks the modal uses to talk to whoever shows it
pub trait UnlockSignalHost {
    /// Request a visibility change
    fn on_open_change(&mut self, open: bool);

    /// A confirmed, non-empty selection in selection order
    fn on_unlock(&mut self, selected: Vec<UnlockOptionId>);
}

/// Host-owned inputs to the modal
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlockSignalProps<'a> {
    pub open: bool,
    /// Badge that opened the modal. Accepted for context only; it does not
    /// change defaults or the unlock payload.
    pub currently_clicked_badge_id: Option<&'a str>,
}

/// Keyboard focus inside the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalFocus {
    /// Checkbox row, indexed into the catalog
    Option(usize),
    UnlockButton,
}

impl Default for ModalFocus {
    fn default() -> Self {
        Self::Option(0)
    }
}

impl ModalFocus {
    fn next(self) -> Self {
        match self {
            Self::Option(i) if i + 1 < UNLOCK_OPTIONS.len() => Self::Option(i + 1),
            Self::Option(_) => Self::UnlockButton,
            Self::UnlockButton => Self::Option(0),
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Option(0) => Self::UnlockButton,
            Self::Option(i) => Self::Option(i - 1),
            Self::UnlockButton => Self::Option(UNLOCK_OPTIONS.len() - 1),
        }
    }
}

/// State of the unlock modal
#[derive(Debug, Clone, Default)]
pub struct UnlockIntentSignalModal {
    selection: SelectionState,
    focus: ModalFocus,
    was_open: bool,
}

impl UnlockIntentSignalModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change
    pub fn toggle(&mut self, id: UnlockOptionId, checked: bool) {
        self.selection.toggle(id, checked);
        tracing::trace!(option = %id, checked, "Unlock option toggled");
    }

    pub fn is_checked(&self, id: UnlockOptionId) -> bool {
        self.selection.contains(id)
    }

    /// Current selection, in selection order
    pub fn selected(&self) -> &[UnlockOptionId] {
        self.selection.as_slice()
    }

    /// The unlock action is enabled iff something is selected
    pub fn can_unlock(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn focus(&self) -> ModalFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Close via the close control; nothing is unlocked
    pub fn dismiss<H: UnlockSignalHost + ?Sized>(&mut self, host: &mut H) {
        host.on_open_change(false);
        self.reset();
    }

    /// Forward the selection to the host, then close and reset
    ///
    /// No-op while the selection is empty. Returns whether the host was called.
    pub fn confirm<H: UnlockSignalHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.can_unlock() {
            tracing::debug!("Unlock pressed with an empty selection; ignoring");
            return false;
        }

        host.on_unlock(self.selection.to_vec());
        host.on_open_change(false);
        self.reset();
        true
    }

    /// Track the host's `open` flag
    ///
    /// Call once per frame. A transition to closed that did not go through
    /// [`dismiss`](Self::dismiss) or [`confirm`](Self::confirm) still clears
    /// the selection, so reopening starts from empty.
    pub fn sync_open(&mut self, props: &UnlockSignalProps<'_>) {
        match (self.was_open, props.open) {
            (false, true) => {
                tracing::debug!(
                    badge = ?props.currently_clicked_badge_id,
                    "Unlock modal opened"
                );
                self.was_open = true;
            }
            (true, false) => self.reset(),
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.selection.clear();
        self.focus = ModalFocus::default();
        self.was_open = false;
    }

    /// Toggle whatever the focused row is, or confirm on the button
    fn activate<H: UnlockSignalHost + ?Sized>(&mut self, host: &mut H) {
        match self.focus {
            ModalFocus::Option(i) => {
                let id = UNLOCK_OPTIONS[i].id;
                let checked = self.is_checked(id);
                self.toggle(id, !checked);
            }
            ModalFocus::UnlockButton => {
                self.confirm(host);
            }
        }
    }

    /// Handle a key while the modal is open; returns whether it was consumed
    pub fn handle_key<H: UnlockSignalHost + ?Sized>(
        &mut self,
        key: KeyEvent,
        host: &mut H,
    ) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => {
                self.dismiss(host);
                true
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.focus_prev();
                true
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.activate(host);
                true
            }
            KeyCode::Char('u') => {
                self.confirm(host);
                true
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as u8 - b'1') as usize;
                self.focus = ModalFocus::Option(index);
                self.activate(host);
                true
            }
            _ => false,
        }
    }
}

/// Render the modal; draws nothing while closed
pub fn render(frame: &mut Frame, modal: &UnlockIntentSignalModal, props: &UnlockSignalProps<'_>) {
    if !props.open {
        return;
    }

    let area = centered_rect_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .title_top(
            Line::from(Span::styled(" [x] ", Style::default().fg(Color::Gray))).right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    render_pitch(frame, columns[0]);
    render_options(frame, modal, columns[1]);
}

/// Left column: heading, copy and the preview mockup
fn render_pitch(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Description
            Constraint::Length(1), // Spacer
            Constraint::Min(5),    // Preview
        ])
        .split(area);

    let bold = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let heading = vec![
        Line::from(vec![
            Span::styled("Unlock the ", bold),
            Span::styled("full power", bold.fg(Color::Cyan)),
        ]),
        Line::from(Span::styled("of Intent Signal", bold)),
    ];
    frame.render_widget(Paragraph::new(heading), chunks[0]);

    let description = Paragraph::new(DESCRIPTION)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[2]);

    render_preview(frame, chunks[4]);
}

/// Decorative video preview; the play glyph is not interactive
fn render_preview(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .style(Style::default().bg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 12 {
        return;
    }

    let bar = |fraction: (u16, u16)| {
        let width = (inner.width.saturating_sub(4) * fraction.0 / fraction.1) as usize;
        Line::from(Span::styled(
            "▬".repeat(width),
            Style::default().fg(Color::LightBlue),
        ))
    };
    let mock = Paragraph::new(vec![
        bar((3, 4)),
        Line::from(""),
        bar((1, 1)),
        Line::from(""),
        bar((5, 6)),
    ]);
    frame.render_widget(
        mock,
        Rect {
            x: inner.x + 2,
            y: inner.y + 1,
            width: inner.width.saturating_sub(4),
            height: inner.height.saturating_sub(2),
        },
    );

    let play = Paragraph::new(Span::styled(
        " ( ▶ ) ",
        Style::default()
            .fg(Color::White)
            .bg(Color::LightBlue)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(
        play,
        Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        },
    );

    let caption = Paragraph::new(Span::styled(
        " Watch video",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        caption,
        Rect {
            y: inner.y + inner.height - 1,
            height: 1,
            ..inner
        },
    );
}

/// Right column: checkbox list and the call to action
fn render_options(frame: &mut Frame, modal: &UnlockIntentSignalModal, area: Rect) {
    let block = Block::default()
        .title(" Unlock premium features ")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = UNLOCK_OPTIONS.len() as u16 * 2 - 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1),    // Spacer
            Constraint::Length(rows), // Checkboxes
            Constraint::Min(0),       // Fill
            Constraint::Length(3),    // Button
            Constraint::Length(1),    // Hints
        ])
        .split(inner);

    for (i, option) in UNLOCK_OPTIONS.iter().enumerate() {
        let row = Rect {
            y: chunks[1].y + i as u16 * 2,
            height: 1,
            ..chunks[1]
        };
        if row.y >= chunks[1].y + chunks[1].height {
            break;
        }
        let checkbox = Checkbox::new(option.label)
            .checked(modal.is_checked(option.id))
            .focused(modal.focus() == ModalFocus::Option(i));
        frame.render_widget(checkbox, row);
    }

    let button = Button::new("Unlock Signal")
        .enabled(modal.can_unlock())
        .focused(modal.focus() == ModalFocus::UnlockButton);
    frame.render_widget(button, chunks[3]);

    let hints = Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::Yellow)),
        Span::raw(" Toggle  "),
        Span::styled("[u]", Style::default().fg(Color::Green)),
        Span::raw(" Unlock  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}
