use crate::{RepsError, WeightError};

/// Rejection of incomplete or out-of-range user input.
///
/// No mutation has occurred when one of these is returned.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("At least one set is required")]
    NoSets,
    #[error("Expected {expected} sets, but {actual} were entered")]
    SetCountMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Reps(#[from] RepsError),
    #[error(transparent)]
    Weight(#[from] WeightError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SessionError {
    #[error("The session contains no exercises")]
    Empty,
    #[error("No date has been chosen for the session")]
    NoDate,
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("stored data could not be parsed")]
    Corrupt,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
