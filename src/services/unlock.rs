//! Unlock service
//!
//! Turns a confirmed modal selection into unlocked signals, persists the feed
//! and appends the request to the unlock ledger.

use crate::audit::UnlockRecord;
use crate::error::{SignalError, SignalResult};
use crate::models::{IntentSignal, SignalStrength, UnlockOptionId};
use crate::storage::Storage;

/// Whether `option` covers `signal`, given the badge that opened the modal
fn covers(option: UnlockOptionId, signal: &IntentSignal, badge_id: Option<&str>) -> bool {
    match option {
        UnlockOptionId::Current => badge_id == Some(signal.id.as_str()),
        UnlockOptionId::SuperStrong => signal.strength == SignalStrength::SuperStrong,
        UnlockOptionId::VeryStrong => signal.strength == SignalStrength::VeryStrong,
        UnlockOptionId::Strong => signal.strength == SignalStrength::Strong,
        UnlockOptionId::All => true,
    }
}

/// Unlock every signal covered by any of `options`
///
/// Returns the ids of signals that were locked before, in feed order.
pub fn apply_unlock(
    signals: &mut [IntentSignal],
    options: &[UnlockOptionId],
    badge_id: Option<&str>,
) -> Vec<String> {
    signals
        .iter_mut()
        .filter(|signal| options.iter().any(|&o| covers(o, signal, badge_id)))
        .filter_map(|signal| signal.unlock().then(|| signal.id.clone()))
        .collect()
}

/// Service for unlock requests
pub struct UnlockService<'a> {
    storage: &'a Storage,
}

impl<'a> UnlockService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Apply a confirmed selection
    ///
    /// `record` controls whether the request is appended to the ledger.
    pub fn unlock(
        &self,
        options: &[UnlockOptionId],
        badge_id: Option<&str>,
        record: bool,
    ) -> SignalResult<UnlockRecord> {
        if options.is_empty() {
            return Err(SignalError::Validation(
                "Select at least one unlock option".into(),
            ));
        }

        let mut signals = self.storage.signals.get_all()?;

        if options.contains(&UnlockOptionId::Current) {
            match badge_id {
                Some(badge) if !signals.iter().any(|s| s.id == badge) => {
                    return Err(SignalError::signal_not_found(badge));
                }
                Some(_) => {}
                None => {
                    tracing::warn!(
                        "'current' requested without a clicked badge; nothing to resolve"
                    )
                }
            }
        }

        let unlocked = apply_unlock(&mut signals, options, badge_id);

        if !unlocked.is_empty() {
            self.storage.signals.commit(signals)?;
        }

        let entry = UnlockRecord::new(
            options.to_vec(),
            badge_id.map(str::to_string),
            unlocked,
        );

        if record {
            self.storage.ledger.log(&entry)?;
        }

        tracing::info!(
            options = %entry.options_summary(),
            unlocked = entry.unlocked_signal_ids.len(),
            "Unlock applied"
        );

        Ok(entry)
    }
}
