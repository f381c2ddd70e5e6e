//! TUI Views module
//!
//! The signal dashboard, status bar and the dialog overlay.

pub mod signals;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    signals::render_header(frame, layout.header);
    signals::render(frame, &app.board, layout.main);
    status_bar::render(frame, &app.board, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.board.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            toast_rect(44, 4, frame.area()),
        );
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    let props = app.board.unlock_props();
    if props.open {
        dialogs::unlock_signal::render(frame, &app.unlock_modal, &props);
        return;
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
