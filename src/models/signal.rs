//! Intent signal model
//!
//! A buying-intent signal for a company, gated behind an unlock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength badge of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStrength {
    SuperStrong,
    VeryStrong,
    Strong,
    Moderate,
}

impl SignalStrength {
    /// Short badge text shown on the dashboard
    pub fn badge(&self) -> &'static str {
        match self {
            Self::SuperStrong => "SUPER",
            Self::VeryStrong => "VERY",
            Self::Strong => "STRONG",
            Self::Moderate => "MOD",
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuperStrong => write!(f, "Super strong"),
            Self::VeryStrong => write!(f, "Very strong"),
            Self::Strong => write!(f, "Strong"),
            Self::Moderate => write!(f, "Moderate"),
        }
    }
}

/// A single intent signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentSignal {
    /// Stable identifier, also used as the badge id
    pub id: String,

    /// Company showing the intent
    pub company: String,

    /// Topic the company is researching
    pub topic: String,

    pub strength: SignalStrength,

    #[serde(default)]
    pub unlocked: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl IntentSignal {
    pub fn new(
        id: impl Into<String>,
        company: impl Into<String>,
        topic: impl Into<String>,
        strength: SignalStrength,
    ) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            topic: topic.into(),
            strength,
            unlocked: false,
            unlocked_at: None,
        }
    }

    /// Mark the signal unlocked; returns false if it already was
    pub fn unlock(&mut self) -> bool {
        if self.unlocked {
            return false;
        }
        self.unlocked = true;
        self.unlocked_at = Some(Utc::now());
        true
    }

    /// Company name, hidden while the signal is locked and masking is on
    pub fn display_company(&self, mask_locked: bool) -> String {
        if self.unlocked || !mask_locked {
            self.company.clone()
        } else {
            "█".repeat(self.company.chars().count().clamp(6, 18))
        }
    }

    /// Sample feed written by `init`
    pub fn sample_feed() -> Vec<IntentSignal> {
        use SignalStrength::{Moderate, Strong, SuperStrong, VeryStrong};

        [
            ("sig-001", "Northwind Traders", "CRM migration", SuperStrong),
            ("sig-002", "Contoso Ltd", "Sales automation", VeryStrong),
            ("sig-003", "Fabrikam Inc", "Lead scoring", Strong),
            ("sig-004", "Tailspin Toys", "Email outreach", SuperStrong),
            ("sig-005", "Wide World Importers", "Data enrichment", Moderate),
            ("sig-006", "Adventure Works", "Pipeline analytics", VeryStrong),
            ("sig-007", "Litware Inc", "Intent data", Strong),
        ]
        .into_iter()
        .map(|(id, company, topic, strength)| IntentSignal::new(id, company, topic, strength))
        .collect()
    }
}
