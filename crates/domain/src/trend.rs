use crate::{Name, RecordStore, Weight};

/// Direction of the heaviest lift of a new session relative to a reference
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Same,
    NoHistory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendChange {
    pub direction: Trend,
    pub delta: f32,
}

/// Compares a candidate heaviest weight against the most recent record of
/// the exercise.
#[must_use]
pub fn trend_against_last(store: &RecordStore, name: &Name, candidate: Weight) -> TrendChange {
    let Some(last) = store.most_recent_record(name) else {
        return TrendChange {
            direction: Trend::NoHistory,
            delta: 0.0,
        };
    };
    let delta = f32::from(candidate) - f32::from(last.heaviest_weight);
    let direction = if delta > 0.0 {
        Trend::Up
    } else if delta < 0.0 {
        Trend::Down
    } else {
        Trend::Same
    };
    TrendChange { direction, delta }
}

/// Signed difference between a candidate heaviest weight and the all-time
/// best of the exercise, `None` without history.
#[must_use]
pub fn delta_against_best(store: &RecordStore, name: &Name, candidate: Weight) -> Option<f32> {
    let history = store.get(name)?;
    Some(f32::from(candidate) - f32::from(history.best_weight))
}
