use std::cell::RefCell;

use liftlog_domain::{RecordStore, Repository, StorageError};

use crate::model;

/// Non-durable single-slot storage, holding the serialized store in memory.
///
/// Unlike [`FileStorage`](crate::FileStorage) it reports a corrupt slot as
/// an error instead of discarding it, which makes it the stricter backend
/// for tests.
#[derive(Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for MemoryStorage {
    fn load(&self) -> Result<RecordStore, StorageError> {
        match &*self.slot.borrow() {
            None => Ok(RecordStore::default()),
            Some(data) => model::decode(data).map_err(|_| StorageError::Corrupt),
        }
    }

    fn save(&self, store: &RecordStore) -> Result<(), StorageError> {
        let data = model::encode(store).map_err(|err| StorageError::Other(Box::new(err)))?;
        *self.slot.borrow_mut() = Some(data);
        Ok(())
    }
}
