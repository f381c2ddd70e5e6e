//! Application state for the TUI
//!
//! `App` splits into the [`SignalBoard`], which hosts the unlock modal (owns
//! its visibility and reacts to unlocks), and the modal's own state. Keeping
//! them as separate fields lets the handler lend the board to the modal.

use crate::config::settings::Settings;
use crate::models::{IntentSignal, UnlockOptionId};
use crate::services::UnlockService;
use crate::storage::Storage;

use super::dialogs::unlock_signal::{UnlockIntentSignalModal, UnlockSignalHost, UnlockSignalProps};
use super::widgets::{Notification, NotificationQueue};

/// Currently active auxiliary dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// The signal dashboard and host of the unlock modal
pub struct SignalBoard<'a> {
    storage: &'a Storage,
    settings: &'a Settings,

    /// Feed as last loaded from storage
    pub signals: Vec<IntentSignal>,

    /// Highlighted row in the signal table
    pub selected_index: usize,

    /// Visibility of the unlock modal
    pub unlock_dialog_open: bool,

    /// Badge whose click opened the modal
    pub clicked_badge_id: Option<String>,

    pub notifications: NotificationQueue,
}

impl<'a> SignalBoard<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            signals: storage.signals.get_all().unwrap_or_default(),
            selected_index: 0,
            unlock_dialog_open: false,
            clicked_badge_id: None,
            notifications: NotificationQueue::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Reload the feed from storage
    pub fn refresh(&mut self) {
        match self.storage.signals.get_all() {
            Ok(signals) => {
                self.signals = signals;
                self.selected_index = self.selected_index.min(self.signals.len().saturating_sub(1));
            }
            Err(e) => {
                tracing::error!("Failed to reload signals: {}", e);
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
    }

    pub fn selected_signal(&self) -> Option<&IntentSignal> {
        self.signals.get(self.selected_index)
    }

    pub fn unlocked_count(&self) -> usize {
        self.signals.iter().filter(|s| s.unlocked).count()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.signals.len() {
            self.selected_index += 1;
        }
    }

    /// Open the unlock modal, optionally from a badge click
    pub fn open_unlock(&mut self, badge_id: Option<String>) {
        self.clicked_badge_id = badge_id;
        self.on_open_change(true);
    }

    /// Props handed to the modal each frame
    pub fn unlock_props(&self) -> UnlockSignalProps<'_> {
        UnlockSignalProps {
            open: self.unlock_dialog_open,
            currently_clicked_badge_id: self.clicked_badge_id.as_deref(),
        }
    }
}

impl UnlockSignalHost for SignalBoard<'_> {
    fn on_open_change(&mut self, open: bool) {
        self.unlock_dialog_open = open;
        if !open {
            self.clicked_badge_id = None;
        }
    }

    fn on_unlock(&mut self, selected: Vec<UnlockOptionId>) {
        let service = UnlockService::new(self.storage);
        let result = service.unlock(
            &selected,
            self.clicked_badge_id.as_deref(),
            self.settings.record_unlocks,
        );

        match result {
            Ok(record) => {
                let count = record.unlocked_signal_ids.len();
                self.notifications.push(Notification::success(format!(
                    "{} signal{} unlocked ({})",
                    count,
                    if count == 1 { "" } else { "s" },
                    record.options_summary()
                )));
                self.refresh();
            }
            Err(e) => {
                tracing::error!("Unlock failed: {}", e);
                self.notifications
                    .push(Notification::error(format!("Unlock failed: {}", e)));
            }
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub board: SignalBoard<'a>,

    pub unlock_modal: UnlockIntentSignalModal,

    pub active_dialog: ActiveDialog,

    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            board: SignalBoard::new(storage, settings),
            unlock_modal: UnlockIntentSignalModal::new(),
            active_dialog: ActiveDialog::default(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if any dialog (including the unlock modal) is showing
    pub fn has_dialog(&self) -> bool {
        self.board.unlock_dialog_open || self.active_dialog != ActiveDialog::None
    }

    /// Let the modal observe the host's open flag; call before each draw
    pub fn sync_dialogs(&mut self) {
        let props = self.board.unlock_props();
        self.unlock_modal.sync_open(&props);
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.board.notifications.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SignalPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SignalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.signals.replace_all(IntentSignal::sample_feed()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_board_unlock_current_badge() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.board.open_unlock(Some("sig-003".into()));
        app.sync_dialogs();
        app.unlock_modal.toggle(UnlockOptionId::Current, true);
        assert!(app.unlock_modal.confirm(&mut app.board));

        assert!(!app.board.unlock_dialog_open);
        assert!(app.board.clicked_badge_id.is_none());
        assert_eq!(app.board.unlocked_count(), 1);
        assert!(app.board.signals.iter().any(|s| s.id == "sig-003" && s.unlocked));
        assert_eq!(storage.ledger.entry_count().unwrap(), 1);
        assert_eq!(app.board.notifications.len(), 1);
    }

    #[test]
    fn test_record_unlocks_setting_respected() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings {
            record_unlocks: false,
            ..Settings::default()
        };
        let mut app = App::new(&storage, &settings);

        app.board.open_unlock(None);
        app.unlock_modal.toggle(UnlockOptionId::All, true);
        app.unlock_modal.confirm(&mut app.board);

        assert_eq!(app.board.unlocked_count(), IntentSignal::sample_feed().len());
        assert_eq!(storage.ledger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_host_close_resets_modal_on_sync() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.board.open_unlock(None);
        app.sync_dialogs();
        app.unlock_modal.toggle(UnlockOptionId::Strong, true);

        app.board.on_open_change(false);
        app.sync_dialogs();

        assert!(app.unlock_modal.selected().is_empty());
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_navigation_bounds() {
        let (_temp, storage) = create_test_storage();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.board.move_up();
        assert_eq!(app.board.selected_index, 0);
        for _ in 0..20 {
            app.board.move_down();
        }
        assert_eq!(app.board.selected_index, IntentSignal::sample_feed().len() - 1);
    }
}
