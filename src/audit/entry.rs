//! Unlock ledger records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::UnlockOptionId;

/// One confirmed unlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRecord {
    pub id: Uuid,

    /// When the unlock was confirmed (UTC)
    pub timestamp: DateTime<Utc>,

    /// Options exactly as emitted by the modal, in selection order
    pub options: Vec<UnlockOptionId>,

    /// Badge that opened the modal, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_id: Option<String>,

    /// Signals newly unlocked by this request
    #[serde(default)]
    pub unlocked_signal_ids: Vec<String>,
}

impl UnlockRecord {
    pub fn new(
        options: Vec<UnlockOptionId>,
        badge_id: Option<String>,
        unlocked_signal_ids: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            options,
            badge_id,
            unlocked_signal_ids,
        }
    }

    /// Comma-separated option ids
    pub fn options_summary(&self) -> String {
        self.options
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Format the record for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] UNLOCK {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.options_summary()
        );

        if let Some(badge) = &self.badge_id {
            output.push_str(&format!(" (badge {})", badge));
        }

        output.push_str(&format!(
            "\n  Unlocked: {}",
            if self.unlocked_signal_ids.is_empty() {
                "nothing new".to_string()
            } else {
                self.unlocked_signal_ids.join(", ")
            }
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_uses_option_ids() {
        let record = UnlockRecord::new(
            vec![UnlockOptionId::Strong, UnlockOptionId::All],
            None,
            vec!["sig-1".into()],
        );

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""options":["strong","all"]"#));
        assert!(!json.contains("badge_id"));

        let back: UnlockRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_human_readable_format() {
        let record = UnlockRecord::new(
            vec![UnlockOptionId::Current],
            Some("sig-3".into()),
            vec!["sig-3".into()],
        );

        let formatted = record.format_human_readable();
        assert!(formatted.contains("UNLOCK current"));
        assert!(formatted.contains("(badge sig-3)"));
        assert!(formatted.contains("Unlocked: sig-3"));
    }

    #[test]
    fn test_nothing_new() {
        let record = UnlockRecord::new(vec![UnlockOptionId::All], None, vec![]);
        assert!(record.format_human_readable().contains("nothing new"));
    }
}
