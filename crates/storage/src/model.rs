//! Serialized form of the record store.
//!
//! The persisted layout is a single mapping from exercise name to history.
//! Decoding re-validates everything through the domain constructors, so the
//! heaviest-set and best-weight values of a loaded store are always
//! recomputed rather than trusted. A record that fails re-validation is
//! dropped with a warning instead of discarding the rest of the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;
use uuid::Uuid;

use liftlog_domain as domain;

pub fn encode(store: &domain::RecordStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&RecordStore::from(store))
}

pub fn decode(data: &str) -> Result<domain::RecordStore, serde_json::Error> {
    let store: RecordStore = serde_json::from_str(data)?;
    Ok(domain::RecordStore::from(store))
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error("left and right side have a different number of sets")]
    UnevenSides,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RecordStore(BTreeMap<String, ExerciseHistory>);

impl From<&domain::RecordStore> for RecordStore {
    fn from(value: &domain::RecordStore) -> Self {
        Self(
            value
                .iter()
                .map(|(name, history)| (name.to_string(), ExerciseHistory::from(history)))
                .collect(),
        )
    }
}

impl From<RecordStore> for domain::RecordStore {
    fn from(value: RecordStore) -> Self {
        let mut store = domain::RecordStore::new();
        for (name, history) in value.0 {
            let name = match domain::Name::new(&name) {
                Ok(name) => name,
                Err(err) => {
                    warn!("dropping exercise {name:?} with invalid name: {err}");
                    continue;
                }
            };
            for record in history.records {
                match domain::WorkoutRecord::try_from(record) {
                    Ok(record) => store.add_record(&name, record),
                    Err(err) => warn!("dropping invalid record of {name}: {err}"),
                }
            }
        }
        store
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    pub best_weight: f32,
    pub records: Vec<WorkoutRecord>,
}

impl From<&domain::ExerciseHistory> for ExerciseHistory {
    fn from(value: &domain::ExerciseHistory) -> Self {
        Self {
            best_weight: f32::from(value.best_weight),
            records: value.records.iter().map(WorkoutRecord::from).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub equipment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle: Option<String>,
    pub layout: SetLayout,
}

impl From<&domain::WorkoutRecord> for WorkoutRecord {
    fn from(value: &domain::WorkoutRecord) -> Self {
        Self {
            id: *value.id,
            date: value.date,
            category: value.category.clone(),
            equipment: value.equipment.clone(),
            muscle: value.muscle.clone(),
            layout: SetLayout::from(&value.layout),
        }
    }
}

impl TryFrom<WorkoutRecord> for domain::WorkoutRecord {
    type Error = DecodeError;

    fn try_from(value: WorkoutRecord) -> Result<Self, Self::Error> {
        Ok(domain::WorkoutRecord::new(
            value.id.into(),
            value.date,
            value.category,
            value.equipment,
            value.muscle,
            domain::SetLayout::try_from(value.layout)?,
        ))
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SetLayout {
    Unilateral {
        left: Vec<PerformedSet>,
        right: Vec<PerformedSet>,
    },
    Bilateral {
        sets: Vec<PerformedSet>,
    },
    Aggregate {
        weight: f32,
    },
}

impl From<&domain::SetLayout> for SetLayout {
    fn from(value: &domain::SetLayout) -> Self {
        match value {
            domain::SetLayout::Bilateral { sets } => SetLayout::Bilateral {
                sets: sets.iter().map(PerformedSet::from).collect(),
            },
            domain::SetLayout::Unilateral { left, right } => SetLayout::Unilateral {
                left: left.iter().map(PerformedSet::from).collect(),
                right: right.iter().map(PerformedSet::from).collect(),
            },
            domain::SetLayout::Aggregate { weight } => SetLayout::Aggregate {
                weight: f32::from(*weight),
            },
        }
    }
}

impl TryFrom<SetLayout> for domain::SetLayout {
    type Error = DecodeError;

    fn try_from(value: SetLayout) -> Result<Self, Self::Error> {
        Ok(match value {
            SetLayout::Bilateral { sets } => domain::SetLayout::Bilateral {
                sets: sets
                    .into_iter()
                    .map(domain::PerformedSet::try_from)
                    .collect::<Result<_, _>>()?,
            },
            SetLayout::Unilateral { left, right } => {
                if left.len() != right.len() {
                    return Err(DecodeError::UnevenSides);
                }
                domain::SetLayout::Unilateral {
                    left: left
                        .into_iter()
                        .map(domain::PerformedSet::try_from)
                        .collect::<Result<_, _>>()?,
                    right: right
                        .into_iter()
                        .map(domain::PerformedSet::try_from)
                        .collect::<Result<_, _>>()?,
                }
            }
            SetLayout::Aggregate { weight } => domain::SetLayout::Aggregate {
                weight: domain::Weight::new(weight)?,
            },
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PerformedSet {
    pub reps: u32,
    pub weight: f32,
}

impl From<&domain::PerformedSet> for PerformedSet {
    fn from(value: &domain::PerformedSet) -> Self {
        Self {
            reps: u32::from(value.reps),
            weight: f32::from(value.weight),
        }
    }
}

impl TryFrom<PerformedSet> for domain::PerformedSet {
    type Error = DecodeError;

    fn try_from(value: PerformedSet) -> Result<Self, Self::Error> {
        Ok(Self {
            reps: domain::Reps::new(value.reps)?,
            weight: domain::Weight::new(value.weight)?,
        })
    }
}
