//! Headless `unlock` command
//!
//! Runs the same modal state machine the TUI uses: every requested option is
//! checked in order, then the selection is confirmed against a host that
//! applies it through [`UnlockService`].

use crate::audit::UnlockRecord;
use crate::config::settings::Settings;
use crate::display::format_unlock_result;
use crate::error::{SignalError, SignalResult};
use crate::models::UnlockOptionId;
use crate::services::UnlockService;
use crate::storage::Storage;
use crate::tui::dialogs::unlock_signal::{UnlockIntentSignalModal, UnlockSignalHost};

/// Host that applies confirmed selections straight to storage
struct CliUnlockHost<'a> {
    service: UnlockService<'a>,
    badge_id: Option<&'a str>,
    record: bool,
    outcome: Option<SignalResult<UnlockRecord>>,
}

impl UnlockSignalHost for CliUnlockHost<'_> {
    fn on_open_change(&mut self, open: bool) {
        tracing::debug!(open, "Headless unlock dialog visibility changed");
    }

    fn on_unlock(&mut self, selected: Vec<UnlockOptionId>) {
        self.outcome = Some(self.service.unlock(&selected, self.badge_id, self.record));
    }
}

/// Parse option ids as given on the command line
pub fn parse_options(raw: &[String]) -> SignalResult<Vec<UnlockOptionId>> {
    raw.iter().map(|s| s.parse()).collect()
}

/// Handle `intent-signal unlock <ID>... [--badge <SIGNAL_ID>]`
pub fn handle_unlock_command(
    storage: &Storage,
    settings: &Settings,
    options: &[String],
    badge: Option<&str>,
) -> SignalResult<()> {
    let ids = parse_options(options)?;

    let mut modal = UnlockIntentSignalModal::new();
    for id in ids {
        modal.toggle(id, true);
    }

    let mut host = CliUnlockHost {
        service: UnlockService::new(storage),
        badge_id: badge,
        record: settings.record_unlocks,
        outcome: None,
    };

    if !modal.confirm(&mut host) {
        return Err(SignalError::Validation(
            "Select at least one unlock option".into(),
        ));
    }

    let record = host.outcome.ok_or_else(|| {
        SignalError::Validation("Unlock was not applied".into())
    })??;

    println!("{}", format_unlock_result(&record));
    Ok(())
}
