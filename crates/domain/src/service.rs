use chrono::NaiveDate;
use log::{error, warn};

use crate::{
    BestLift, LayoutKind, Name, PreviousSets, RecordID, RecordStore, Repository, SessionBuilder,
    SessionError, TrendChange, Weight, WorkoutRecord, previous_sets, trend_against_last,
};

/// Routes all history mutations through the record store and persists the
/// full store after each of them.
///
/// The store is loaded once at construction; unreadable state falls back to
/// an empty store. Persistence failures are logged and do not fail the
/// mutation, which stays effective in memory.
pub struct Service<R> {
    repository: R,
    store: RecordStore,
}

impl<R: Repository> Service<R> {
    pub fn new(repository: R) -> Self {
        let store = match repository.load() {
            Ok(store) => store,
            Err(err) => {
                warn!("failed to load record store, starting empty: {err}");
                RecordStore::default()
            }
        };
        Self { repository, store }
    }

    #[must_use]
    pub fn record_store(&self) -> &RecordStore {
        &self.store
    }

    pub fn add_record(&mut self, name: &Name, record: WorkoutRecord) {
        self.store.add_record(name, record);
        self.persist();
    }

    pub fn edit_record(&mut self, name: &Name, record: WorkoutRecord) {
        self.store.edit_record(name, record);
        self.persist();
    }

    pub fn delete_record(&mut self, name: &Name, id: RecordID) {
        self.store.delete_record(name, id);
        self.persist();
    }

    pub fn commit_session(
        &mut self,
        session: &mut SessionBuilder,
        date: NaiveDate,
    ) -> Result<Vec<RecordID>, SessionError> {
        let ids = session.commit(date, &mut self.store)?;
        self.persist();
        Ok(ids)
    }

    #[must_use]
    pub fn previous_sets(&self, name: &Name, kind: LayoutKind, requested: usize) -> PreviousSets {
        previous_sets(&self.store, name, kind, requested)
    }

    #[must_use]
    pub fn trend_against_last(&self, name: &Name, candidate: Weight) -> TrendChange {
        trend_against_last(&self.store, name, candidate)
    }

    #[must_use]
    pub fn delta_against_best(&self, name: &Name, candidate: Weight) -> Option<f32> {
        crate::delta_against_best(&self.store, name, candidate)
    }

    #[must_use]
    pub fn best_record(&self, name: &Name) -> Option<BestLift> {
        self.store.best_record(name)
    }

    fn persist(&self) {
        if let Err(err) = self.repository.save(&self.store) {
            error!("failed to save record store: {err}");
        }
    }
}
