use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use jianji_core::AssessmentState;
use jianji_storage::{StorageError, STORAGE_KEY};

/// Owner of the canonical assessment record. Single instance, single
/// local user; the mutex only covers the short swap between the UI thread
/// and the detached formulation task.
pub struct AppState {
    data_dir: PathBuf,
    data: Mutex<AssessmentState>,
}

impl AppState {
    /// Load the saved record from `data_dir`, falling back to defaults
    /// when nothing (or nothing readable) is saved.
    pub fn load(data_dir: PathBuf) -> Result<Self, StorageError> {
        let saved: Option<AssessmentState> = jianji_storage::load_state(&data_dir, STORAGE_KEY)?;
        Ok(Self {
            data_dir,
            data: Mutex::new(saved.unwrap_or_default()),
        })
    }

    /// Load from the platform data directory.
    pub fn open() -> Result<Self, StorageError> {
        Self::load(jianji_storage::default_data_dir()?)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, AssessmentState> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the current record.
    pub fn snapshot(&self) -> AssessmentState {
        self.lock().clone()
    }

    /// Persist the current record under the fixed storage key.
    pub(crate) fn persist(&self, data: &AssessmentState) -> Result<(), StorageError> {
        jianji_storage::save_state(&self.data_dir, STORAGE_KEY, data)
    }
}
