//! JSON file helpers
//!
//! Writes go through a sibling temp file and a rename so a crash never leaves
//! a half-written feed behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SignalError;

fn storage_err(action: &str, path: &Path, err: impl std::fmt::Display) -> SignalError {
    SignalError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read JSON from `path`, or `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, SignalError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_err("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_err("parse", path, e))
}

/// Write `data` as pretty JSON to `path` atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SignalError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| storage_err("create", &temp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("serialize", path, e))?;
    writer.flush().map_err(|e| storage_err("flush", &temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_err("replace", path, e)
    })
}

/// Whether `path` exists and holds parseable JSON
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    File::open(path.as_ref())
        .map(|file| serde_json::from_reader::<_, serde_json::Value>(BufReader::new(file)).is_ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let values: Vec<String> = read_json(temp_dir.path().join("absent.json")).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("values.json");

        write_json_atomic(&path, &vec!["a".to_string(), "b".to_string()]).unwrap();

        let values: Vec<String> = read_json(&path).unwrap();
        assert_eq!(values, ["a", "b"]);
        assert!(!temp_dir.path().join("nested").join("values.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = read_json::<Vec<String>, _>(&path).unwrap_err();
        assert!(matches!(err, SignalError::Storage(_)));
        assert!(!json_file_valid(&path));
    }

    #[test]
    fn test_json_file_valid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ok.json");
        assert!(!json_file_valid(&path));

        std::fs::write(&path, "[]").unwrap();
        assert!(json_file_valid(&path));
    }
}
