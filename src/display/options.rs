//! Unlock option catalog formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{UnlockOption, UNLOCK_OPTIONS};

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "#")]
    key: usize,
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
}

impl From<(usize, &UnlockOption)> for OptionRow {
    fn from((index, option): (usize, &UnlockOption)) -> Self {
        Self {
            key: index + 1,
            id: option.id.as_str(),
            label: option.label,
        }
    }
}

/// Format the catalog as a table, numbered by its TUI shortcut key
pub fn format_option_table() -> String {
    let rows: Vec<OptionRow> = UNLOCK_OPTIONS.iter().enumerate().map(OptionRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the catalog as pretty JSON
pub fn format_option_json() -> serde_json::Result<String> {
    let catalog: Vec<serde_json::Value> = UNLOCK_OPTIONS
        .iter()
        .map(|o| serde_json::json!({ "id": o.id, "label": o.label }))
        .collect();
    serde_json::to_string_pretty(&catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_table_lists_catalog() {
        let table = format_option_table();
        for option in UNLOCK_OPTIONS.iter() {
            assert!(table.contains(option.id.as_str()));
            assert!(table.contains(option.label));
        }
    }

    #[test]
    fn test_option_json_order() {
        let json = format_option_json().unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0]["id"], "current");
        assert_eq!(parsed[4]["id"], "all");
    }
}
