//! Append-only unlock ledger
//!
//! Each record is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{SignalError, SignalResult};

use super::entry::UnlockRecord;

/// Writes and reads the JSONL unlock ledger
pub struct UnlockLedger {
    log_path: PathBuf,
}

impl UnlockLedger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append a record to the ledger
    pub fn log(&self, record: &UnlockRecord) -> SignalResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| SignalError::Io(format!("Failed to open unlock ledger: {}", e)))?;

        let json = serde_json::to_string(record)
            .map_err(|e| SignalError::Json(format!("Failed to serialize unlock record: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| SignalError::Io(format!("Failed to write unlock record: {}", e)))?;
        file.flush()
            .map_err(|e| SignalError::Io(format!("Failed to flush unlock ledger: {}", e)))?;

        tracing::debug!(
            record_id = %record.id,
            options = %record.options_summary(),
            "Recorded unlock"
        );
        Ok(())
    }

    /// Read all records, oldest first
    pub fn read_all(&self) -> SignalResult<Vec<UnlockRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| SignalError::Io(format!("Failed to open unlock ledger: {}", e)))?;

        let mut records = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                SignalError::Io(format!("Failed to read ledger line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let record: UnlockRecord = serde_json::from_str(&line).map_err(|e| {
                SignalError::Json(format!(
                    "Failed to parse unlock record at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Read the most recent `count` records, oldest first
    pub fn read_recent(&self, count: usize) -> SignalResult<Vec<UnlockRecord>> {
        let mut records = self.read_all()?;
        let start = records.len().saturating_sub(count);
        Ok(records.split_off(start))
    }

    pub fn entry_count(&self) -> SignalResult<usize> {
        Ok(self.read_all()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnlockOptionId;
    use tempfile::TempDir;

    fn create_test_ledger() -> (UnlockLedger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = UnlockLedger::new(temp_dir.path().join("unlocks.log"));
        (ledger, temp_dir)
    }

    #[test]
    fn test_missing_ledger_is_empty() {
        let (ledger, _temp) = create_test_ledger();
        assert!(ledger.read_all().unwrap().is_empty());
        assert_eq!(ledger.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_log_and_read() {
        let (ledger, _temp) = create_test_ledger();
        let record = UnlockRecord::new(
            vec![UnlockOptionId::Strong, UnlockOptionId::All],
            None,
            vec!["sig-1".into()],
        );

        ledger.log(&record).unwrap();

        let records = ledger.read_all().unwrap();
        assert_eq!(records, vec![record]);
    }

    #[test]
    fn test_read_recent() {
        let (ledger, _temp) = create_test_ledger();
        for badge in ["a", "b", "c", "d"] {
            ledger
                .log(&UnlockRecord::new(
                    vec![UnlockOptionId::Current],
                    Some(badge.into()),
                    vec![],
                ))
                .unwrap();
        }

        let recent = ledger.read_recent(2).unwrap();
        let badges: Vec<_> = recent.iter().filter_map(|r| r.badge_id.as_deref()).collect();
        assert_eq!(badges, ["c", "d"]);
        assert_eq!(ledger.read_recent(10).unwrap().len(), 4);
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (ledger, temp_dir) = create_test_ledger();
        std::fs::write(temp_dir.path().join("unlocks.log"), "\n{not json}\n").unwrap();

        let err = ledger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
