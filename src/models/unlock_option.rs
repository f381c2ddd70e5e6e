//! Unlock option catalog
//!
//! The five fixed tiers a user can ask to unlock. Identifiers are a stable
//! external contract: they appear in the unlock ledger, on the command line
//! and in serialized form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SignalError;

/// Identifier of an unlock option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockOptionId {
    /// The signal whose badge was clicked
    Current,
    SuperStrong,
    VeryStrong,
    Strong,
    /// Every signal in the feed
    All,
}

impl UnlockOptionId {
    /// Stable string identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::SuperStrong => "super_strong",
            Self::VeryStrong => "very_strong",
            Self::Strong => "strong",
            Self::All => "all",
        }
    }

    /// Human-readable label shown next to the checkbox
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Current => "Unlock Current signal",
            Self::SuperStrong => "Unlock Super strong signals only",
            Self::VeryStrong => "Unlock Very strong Signals only",
            Self::Strong => "Unlock Strong Signals only",
            Self::All => "Unlock All Signals",
        }
    }
}

impl fmt::Display for UnlockOptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnlockOptionId {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UNLOCK_OPTIONS
            .iter()
            .map(|option| option.id)
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| SignalError::UnknownOption(s.to_string()))
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockOption {
    pub id: UnlockOptionId,
    pub label: &'static str,
}

impl UnlockOption {
    const fn new(id: UnlockOptionId) -> Self {
        Self {
            id,
            label: id.label(),
        }
    }
}

/// The unlock catalog, in display order
pub const UNLOCK_OPTIONS: [UnlockOption; 5] = [
    UnlockOption::new(UnlockOptionId::Current),
    UnlockOption::new(UnlockOptionId::SuperStrong),
    UnlockOption::new(UnlockOptionId::VeryStrong),
    UnlockOption::new(UnlockOptionId::Strong),
    UnlockOption::new(UnlockOptionId::All),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_ids() {
        let ids: Vec<&str> = UNLOCK_OPTIONS.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["current", "super_strong", "very_strong", "strong", "all"]);
    }

    #[test]
    fn test_catalog_labels() {
        assert_eq!(UNLOCK_OPTIONS[0].label, "Unlock Current signal");
        assert_eq!(UNLOCK_OPTIONS[4].label, "Unlock All Signals");
    }

    #[test]
    fn test_parse() {
        assert_eq!("strong".parse::<UnlockOptionId>().unwrap(), UnlockOptionId::Strong);
        assert_eq!(" all ".parse::<UnlockOptionId>().unwrap(), UnlockOptionId::All);

        let err = "weak".parse::<UnlockOptionId>().unwrap_err();
        assert!(matches!(err, SignalError::UnknownOption(ref s) if s == "weak"));
    }

    #[test]
    fn test_serde_uses_stable_ids() {
        let json = serde_json::to_string(&UnlockOptionId::SuperStrong).unwrap();
        assert_eq!(json, "\"super_strong\"");

        let id: UnlockOptionId = serde_json::from_str("\"very_strong\"").unwrap();
        assert_eq!(id, UnlockOptionId::VeryStrong);
    }
}
