//! jianji-storage
//!
//! Local persistence of the assessment record: one JSON blob under a fixed
//! storage key in the platform data directory. Thin wrapper around the
//! filesystem.

pub mod error;
pub mod state;

use std::path::PathBuf;

pub use error::StorageError;
pub use state::{delete_state, load_state, save_state};

/// Fixed key the whole aggregate is stored under.
pub const STORAGE_KEY: &str = "jianji_assessment_data";

/// Platform data directory for Jianji records.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
    Ok(base.join("com.jianji.desktop"))
}
