use crate::{LayoutKind, Name, PerformedSet, RecordStore, Reps, SetLayout, Weight};

/// Reference values of one set of the most recent record, used to pre-fill
/// the corresponding set of a new session.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PreviousSet {
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
}

impl PreviousSet {
    fn from_performed(set: &PerformedSet) -> Self {
        Self {
            weight: Some(set.weight),
            reps: Some(set.reps),
        }
    }
}

/// Per-set reference values in the shape of the requested layout.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviousSets {
    Bilateral(Vec<PreviousSet>),
    Unilateral {
        left: Vec<PreviousSet>,
        right: Vec<PreviousSet>,
    },
}

/// Reconstructs per-set reference values from the most recent record of the
/// exercise, reconciling a layout mismatch between the stored record and the
/// requested layout.
///
/// The result always has `requested` entries per required side. Set indices
/// beyond the stored record remain blank. When a stored two-sided record is
/// collapsed into one column, the heavier side wins per index and the left
/// side provides the reps on equal weights. When a stored one-column record
/// is expanded to two sides, it is mirrored onto both. Records without
/// per-set detail fill every weight slot with their aggregate weight and
/// leave the reps blank.
#[must_use]
pub fn previous_sets(
    store: &RecordStore,
    name: &Name,
    kind: LayoutKind,
    requested: usize,
) -> PreviousSets {
    let Some(record) = store.most_recent_record(name) else {
        return blank(kind, requested);
    };

    match (&record.layout, kind) {
        (SetLayout::Bilateral { sets }, LayoutKind::Bilateral) => {
            PreviousSets::Bilateral(copy_side(sets, requested))
        }
        (SetLayout::Unilateral { left, right }, LayoutKind::Unilateral) => {
            PreviousSets::Unilateral {
                left: copy_side(left, requested),
                right: copy_side(right, requested),
            }
        }
        (SetLayout::Unilateral { left, right }, LayoutKind::Bilateral) => {
            PreviousSets::Bilateral(
                (0..requested)
                    .map(|i| collapse(left.get(i), right.get(i)))
                    .collect(),
            )
        }
        (SetLayout::Bilateral { sets }, LayoutKind::Unilateral) => PreviousSets::Unilateral {
            left: copy_side(sets, requested),
            right: copy_side(sets, requested),
        },
        (SetLayout::Aggregate { weight }, LayoutKind::Bilateral) => {
            PreviousSets::Bilateral(aggregate_side(*weight, requested))
        }
        (SetLayout::Aggregate { weight }, LayoutKind::Unilateral) => PreviousSets::Unilateral {
            left: aggregate_side(*weight, requested),
            right: aggregate_side(*weight, requested),
        },
    }
}

fn blank(kind: LayoutKind, requested: usize) -> PreviousSets {
    match kind {
        LayoutKind::Bilateral => PreviousSets::Bilateral(vec![PreviousSet::default(); requested]),
        LayoutKind::Unilateral => PreviousSets::Unilateral {
            left: vec![PreviousSet::default(); requested],
            right: vec![PreviousSet::default(); requested],
        },
    }
}

fn copy_side(sets: &[PerformedSet], requested: usize) -> Vec<PreviousSet> {
    (0..requested)
        .map(|i| {
            sets.get(i)
                .map(PreviousSet::from_performed)
                .unwrap_or_default()
        })
        .collect()
}

fn collapse(left: Option<&PerformedSet>, right: Option<&PerformedSet>) -> PreviousSet {
    match (left, right) {
        // The reps accompany the weight of the heavier side, the left side
        // winning on equal weights.
        (Some(l), Some(r)) => PreviousSet::from_performed(if r.weight > l.weight { r } else { l }),
        (Some(s), None) | (None, Some(s)) => PreviousSet::from_performed(s),
        (None, None) => PreviousSet::default(),
    }
}

fn aggregate_side(weight: Weight, requested: usize) -> Vec<PreviousSet> {
    vec![
        PreviousSet {
            weight: Some(weight),
            reps: None,
        };
        requested
    ]
}
