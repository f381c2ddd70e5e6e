//! Signal feed and unlock history formatting

use tabled::{settings::Style, Table, Tabled};

use crate::audit::UnlockRecord;
use crate::models::IntentSignal;

#[derive(Tabled)]
struct SignalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Strength")]
    strength: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Topic")]
    topic: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format the feed as a table
///
/// Locked companies are masked when `mask_locked` is set.
pub fn format_signal_table(signals: &[IntentSignal], mask_locked: bool) -> String {
    if signals.is_empty() {
        return "No signals found.\n\nRun 'intent-signal init' to load the sample feed.".to_string();
    }

    let rows: Vec<SignalRow> = signals
        .iter()
        .map(|s| SignalRow {
            id: s.id.clone(),
            strength: s.strength.to_string(),
            company: s.display_company(mask_locked),
            topic: s.topic.clone(),
            status: match s.unlocked_at {
                Some(at) if s.unlocked => format!("Unlocked {}", at.format("%Y-%m-%d")),
                _ if s.unlocked => "Unlocked".to_string(),
                _ => "Locked".to_string(),
            },
        })
        .collect();

    let unlocked = signals.iter().filter(|s| s.unlocked).count();
    format!(
        "{}\n\nUnlocked: {}/{}",
        Table::new(rows).with(Style::rounded()),
        unlocked,
        signals.len()
    )
}

/// Format the result of a single unlock
pub fn format_unlock_result(record: &UnlockRecord) -> String {
    match record.unlocked_signal_ids.len() {
        0 => format!("Requested: {}\nNo new signals unlocked.", record.options_summary()),
        n => format!(
            "Requested: {}\nUnlocked {} signal{}: {}",
            record.options_summary(),
            n,
            if n == 1 { "" } else { "s" },
            record.unlocked_signal_ids.join(", ")
        ),
    }
}

/// Format ledger records, newest last
pub fn format_history(records: &[UnlockRecord]) -> String {
    if records.is_empty() {
        return "No unlocks recorded yet.".to_string();
    }

    records
        .iter()
        .map(UnlockRecord::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SignalStrength, UnlockOptionId};

    #[test]
    fn test_signal_table_masks_locked() {
        let mut signals = vec![
            IntentSignal::new("sig-1", "Acme Corp", "CRM", SignalStrength::Strong),
            IntentSignal::new("sig-2", "Globex", "ERP", SignalStrength::Moderate),
        ];
        signals[1].unlock();

        let table = format_signal_table(&signals, true);
        assert!(!table.contains("Acme Corp"));
        assert!(table.contains("Globex"));
        assert!(table.contains("Unlocked: 1/2"));

        let unmasked = format_signal_table(&signals, false);
        assert!(unmasked.contains("Acme Corp"));
    }

    #[test]
    fn test_empty_feed() {
        assert!(format_signal_table(&[], true).contains("intent-signal init"));
    }

    #[test]
    fn test_unlock_result() {
        let record = UnlockRecord::new(vec![UnlockOptionId::Strong], None, vec!["sig-3".into()]);
        assert_eq!(
            format_unlock_result(&record),
            "Requested: strong\nUnlocked 1 signal: sig-3"
        );

        let empty = UnlockRecord::new(vec![UnlockOptionId::Current], None, vec![]);
        assert!(format_unlock_result(&empty).contains("No new signals"));
    }

    #[test]
    fn test_history_empty() {
        assert_eq!(format_history(&[]), "No unlocks recorded yet.");
    }
}
