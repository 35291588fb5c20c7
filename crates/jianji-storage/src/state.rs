use std::io;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

fn blob_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Load a saved JSON state blob. A missing file is `Ok(None)`; so is a
/// malformed blob — deserialization failure is logged and treated as "no
/// saved data", never surfaced as an error.
pub fn load_state<T: DeserializeOwned>(dir: &Path, key: &str) -> Result<Option<T>, StorageError> {
    let path = blob_path(dir, key);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StorageError::Io(e)),
    };

    match serde_json::from_str(&contents) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "malformed saved record, starting from defaults"
            );
            Ok(None)
        }
    }
}

/// Save a JSON state blob. Writes to a temp file then renames for
/// atomicity, so a crash mid-write never leaves a truncated record.
pub fn save_state<T: Serialize>(dir: &Path, key: &str, value: &T) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(value)?;

    let path = blob_path(dir, key);
    let tmp_path = dir.join(format!("{key}.json.tmp"));
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, &path)?;

    tracing::debug!(path = %path.display(), "record saved");
    Ok(())
}

/// Remove a saved blob, if present.
pub fn delete_state(dir: &Path, key: &str) -> Result<(), StorageError> {
    let path = blob_path(dir, key);
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "record deleted");
    }
    Ok(())
}
