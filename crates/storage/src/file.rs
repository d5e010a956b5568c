use std::{fs, path::PathBuf};

use log::warn;

use liftlog_domain::{RecordStore, Repository, StorageError};

use crate::model;

const KEY_RECORD_STORE: &str = "record_store";

/// Durable single-slot storage: one JSON document in a directory.
///
/// An absent or unparsable document yields an empty store, so a corrupted
/// slot can never prevent the application from starting.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{KEY_RECORD_STORE}.json")),
        }
    }
}

impl Repository for FileStorage {
    fn load(&self) -> Result<RecordStore, StorageError> {
        if !self.path.exists() {
            return Ok(RecordStore::default());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|err| StorageError::Other(Box::new(err)))?;
        match model::decode(&data) {
            Ok(store) => Ok(store),
            Err(err) => {
                warn!(
                    "discarding unparsable record store at {}: {err}",
                    self.path.display()
                );
                Ok(RecordStore::default())
            }
        }
    }

    fn save(&self, store: &RecordStore) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::Other(Box::new(err)))?;
        }
        let data = model::encode(store).map_err(|err| StorageError::Other(Box::new(err)))?;
        fs::write(&self.path, data).map_err(|err| StorageError::Other(Box::new(err)))
    }
}
