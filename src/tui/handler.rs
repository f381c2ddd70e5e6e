//! Event handler for the TUI
//!
//! Routes key events to the open dialog first, then to the dashboard.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.board.unlock_dialog_open {
        app.unlock_modal.handle_key(key, &mut app.board);
        return Ok(());
    }

    if app.active_dialog == ActiveDialog::Help {
        app.close_dialog();
        return Ok(());
    }

    handle_dashboard_key(app, key)
}

/// Handle keys on the signal dashboard
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('j') | KeyCode::Down => app.board.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.board.move_up(),

        // Clicking a badge opens the modal with that signal as "current"
        KeyCode::Enter => {
            let badge = app.board.selected_signal().map(|s| s.id.clone());
            if badge.is_some() {
                app.board.open_unlock(badge);
            }
        }

        KeyCode::Char('u') => app.board.open_unlock(None),
        KeyCode::Char('r') => app.board.refresh(),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{paths::SignalPaths, settings::Settings};
    use crate::models::IntentSignal;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.signals.replace_all(IntentSignal::sample_feed()).unwrap();
        (temp_dir, storage)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
        app.sync_dialogs();
    }

    #[test]
    fn test_badge_click_flow() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.board.unlock_dialog_open);
        assert_eq!(app.board.clicked_badge_id.as_deref(), Some("sig-002"));

        // 'q' inside the modal must not quit the app
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('u'));

        assert!(!app.board.unlock_dialog_open);
        let unlocked: Vec<_> = app
            .board
            .signals
            .iter()
            .filter(|s| s.unlocked)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(unlocked, ["sig-002"]);
    }

    #[test]
    fn test_dismiss_then_reopen_starts_empty() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Char('1'));
        assert!(app.unlock_modal.can_unlock());

        press(&mut app, KeyCode::Esc);
        assert!(!app.board.unlock_dialog_open);
        assert_eq!(app.board.unlocked_count(), 0);

        press(&mut app, KeyCode::Char('u'));
        assert!(app.board.unlock_dialog_open);
        assert!(app.unlock_modal.selected().is_empty());
        assert!(!app.unlock_modal.can_unlock());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }

    #[test]
    fn test_quit() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
