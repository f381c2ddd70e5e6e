//! `signals` and `history` commands

use crate::config::settings::Settings;
use crate::display::{format_history, format_signal_table};
use crate::error::SignalResult;
use crate::storage::Storage;

/// Print the signal feed
pub fn handle_signals_command(storage: &Storage, settings: &Settings) -> SignalResult<()> {
    let signals = storage.signals.get_all()?;
    println!(
        "{}",
        format_signal_table(&signals, settings.mask_locked_companies)
    );
    Ok(())
}

/// Print the most recent ledger records
pub fn handle_history_command(storage: &Storage, limit: usize) -> SignalResult<()> {
    let records = storage.ledger.read_recent(limit)?;
    println!("{}", format_history(&records));

    let total = storage.ledger.entry_count()?;
    if total > records.len() {
        println!("\n({} of {} records shown)", records.len(), total);
    }
    Ok(())
}
