use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{Reps, SetLayout, Weight};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordID(Uuid);

impl RecordID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for RecordID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for RecordID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// One exercise performed on one date.
///
/// `heaviest_weight` and `heaviest_set_count` are derived from `layout` at
/// construction time: the maximum weight across all sets and the number of
/// sets (pooled across both sides) lifting exactly that weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: RecordID,
    pub date: NaiveDate,
    pub category: String,
    pub equipment: String,
    pub muscle: Option<String>,
    pub layout: SetLayout,
    pub heaviest_weight: Weight,
    pub heaviest_set_count: u32,
}

impl WorkoutRecord {
    #[must_use]
    pub fn new(
        id: RecordID,
        date: NaiveDate,
        category: String,
        equipment: String,
        muscle: Option<String>,
        layout: SetLayout,
    ) -> Self {
        let (heaviest_weight, heaviest_set_count) = layout.heaviest();
        Self {
            id,
            date,
            category,
            equipment,
            muscle,
            layout,
            heaviest_weight,
            heaviest_set_count,
        }
    }

    /// The heaviest weight of the record and the reps of the first set
    /// lifting it, in left-side-before-right-side order.
    ///
    /// Records without per-set detail yield no reps.
    #[must_use]
    pub fn heaviest_with_reps(&self) -> (Weight, Option<Reps>) {
        if let SetLayout::Aggregate { weight } = self.layout {
            return (weight, None);
        }
        let sets = self.layout.sets();
        let heaviest = sets
            .iter()
            .map(|s| s.weight)
            .fold(Weight::default(), Weight::max);
        let reps = sets.iter().find(|s| s.weight == heaviest).map(|s| s.reps);
        (heaviest, reps)
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.layout.volume()
    }
}
