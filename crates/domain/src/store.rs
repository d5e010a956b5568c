use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{Name, RecordID, Reps, Weight, WorkoutRecord};

/// All records of one exercise, in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseHistory {
    pub best_weight: Weight,
    pub records: Vec<WorkoutRecord>,
}

impl ExerciseHistory {
    fn recompute_best_weight(&mut self) {
        self.best_weight = self
            .records
            .iter()
            .map(|r| r.heaviest_weight)
            .fold(Weight::default(), Weight::max);
    }
}

/// The heaviest lift ever recorded for an exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestLift {
    pub weight: Weight,
    pub reps: Option<Reps>,
    pub date: NaiveDate,
}

/// The long-lived owner of all workout history, keyed by exercise name.
///
/// An exercise entry is created lazily with its first record and removed
/// entirely with its last one. Operations on unknown exercise names are
/// no-ops.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    exercises: BTreeMap<Name, ExerciseHistory>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &Name) -> Option<&ExerciseHistory> {
        self.exercises.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &ExerciseHistory)> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// The best weight ever recorded for the exercise, 0 kg without history.
    #[must_use]
    pub fn best_weight(&self, name: &Name) -> Weight {
        self.exercises
            .get(name)
            .map(|h| h.best_weight)
            .unwrap_or_default()
    }

    pub fn add_record(&mut self, name: &Name, record: WorkoutRecord) {
        let history = self.exercises.entry(name.clone()).or_default();
        if record.heaviest_weight > history.best_weight {
            history.best_weight = record.heaviest_weight;
        }
        history.records.push(record);
    }

    /// Removes the record with the given id. Removing the last record drops
    /// the exercise entry; otherwise the best weight is recomputed as a full
    /// maximum over the remaining records. Deleting an unknown id is a no-op.
    pub fn delete_record(&mut self, name: &Name, id: RecordID) {
        let Some(history) = self.exercises.get_mut(name) else {
            return;
        };
        history.records.retain(|r| r.id != id);
        if history.records.is_empty() {
            self.exercises.remove(name);
        } else {
            history.recompute_best_weight();
        }
    }

    /// Replaces the record with the same id, keeping its position, and
    /// recomputes the best weight, which may decrease.
    pub fn edit_record(&mut self, name: &Name, record: WorkoutRecord) {
        let Some(history) = self.exercises.get_mut(name) else {
            return;
        };
        let Some(existing) = history.records.iter_mut().find(|r| r.id == record.id) else {
            return;
        };
        *existing = record;
        history.recompute_best_weight();
    }

    /// The record with the maximum date. Records sharing the maximum date
    /// are resolved to the first-inserted one.
    #[must_use]
    pub fn most_recent_record(&self, name: &Name) -> Option<&WorkoutRecord> {
        self.exercises
            .get(name)?
            .records
            .iter()
            .reduce(|most_recent, r| {
                if r.date > most_recent.date {
                    r
                } else {
                    most_recent
                }
            })
    }

    /// The all-time best lift: the newest record whose heaviest weight
    /// equals the best weight, so a tie favors the most recent achievement.
    #[must_use]
    pub fn best_record(&self, name: &Name) -> Option<BestLift> {
        let history = self.exercises.get(name)?;
        let record = history
            .records
            .iter()
            .rev()
            .find(|r| r.heaviest_weight == history.best_weight)?;
        let (weight, reps) = record.heaviest_with_reps();
        Some(BestLift {
            weight,
            reps,
            date: record.date,
        })
    }
}
