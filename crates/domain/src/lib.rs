#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod name;
mod previous;
mod record;
mod service;
mod session;
mod set;
mod store;
mod trend;

pub use error::{SessionError, StorageError, ValidationError};
pub use name::{Name, NameError};
pub use previous::{PreviousSet, PreviousSets, previous_sets};
pub use record::{RecordID, WorkoutRecord};
pub use service::Service;
pub use session::{
    EntryInput, SessionBuilder, SessionEntry, SessionTotals, SetInput, SidesInput,
};
pub use set::{
    LayoutKind, PerformedSet, Reps, RepsError, SetLayout, Weight, WeightError,
};
pub use store::{BestLift, ExerciseHistory, RecordStore};
pub use trend::{Trend, TrendChange, delta_against_best, trend_against_last};

/// Persistence of the record store as one named slot, rewritten in full
/// after every mutation.
pub trait Repository {
    fn load(&self) -> Result<RecordStore, StorageError>;
    fn save(&self, store: &RecordStore) -> Result<(), StorageError>;
}
