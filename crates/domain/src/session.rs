use chrono::NaiveDate;

use crate::{
    Name, PerformedSet, RecordID, RecordStore, Reps, SessionError, SetLayout, ValidationError,
    Weight, WorkoutRecord,
};

/// Raw per-set input as entered by the user.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetInput {
    pub reps: String,
    pub weight: String,
}

impl SetInput {
    #[must_use]
    pub fn new(reps: &str, weight: &str) -> Self {
        Self {
            reps: reps.to_string(),
            weight: weight.to_string(),
        }
    }
}

/// Raw input of all required sides of an exercise entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidesInput {
    Bilateral {
        sets: Vec<SetInput>,
    },
    Unilateral {
        left: Vec<SetInput>,
        right: Vec<SetInput>,
    },
}

/// Everything entered for one exercise of an in-progress session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInput {
    pub name: Name,
    pub category: String,
    pub equipment: String,
    pub muscle: Option<String>,
    pub set_count: usize,
    pub sets: SidesInput,
}

/// A validated exercise entry of an in-progress session.
///
/// Entries exist only until the session is committed or the entry is
/// removed; committing converts them into stored records.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    pub name: Name,
    pub category: String,
    pub equipment: String,
    pub muscle: Option<String>,
    pub layout: SetLayout,
    pub heaviest_weight: Weight,
    pub heaviest_set_count: u32,
}

impl SessionEntry {
    /// Validates raw input and builds an entry with its heaviest-set
    /// statistics.
    ///
    /// Fails if the number of entered sets differs from the declared set
    /// count on any required side, if any reps value is missing or not at
    /// least 1, or if any weight value is negative. An unparsable weight is
    /// recorded as 0 kg.
    pub fn from_input(input: EntryInput) -> Result<Self, ValidationError> {
        if input.set_count == 0 {
            return Err(ValidationError::NoSets);
        }

        let layout = match input.sets {
            SidesInput::Bilateral { sets } => SetLayout::Bilateral {
                sets: parse_side(&sets, input.set_count)?,
            },
            SidesInput::Unilateral { left, right } => SetLayout::Unilateral {
                left: parse_side(&left, input.set_count)?,
                right: parse_side(&right, input.set_count)?,
            },
        };
        let (heaviest_weight, heaviest_set_count) = layout.heaviest();

        Ok(Self {
            name: input.name,
            category: input.category,
            equipment: input.equipment,
            muscle: input.muscle,
            layout,
            heaviest_weight,
            heaviest_set_count,
        })
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.layout.volume()
    }
}

fn parse_side(sets: &[SetInput], expected: usize) -> Result<Vec<PerformedSet>, ValidationError> {
    if sets.len() != expected {
        return Err(ValidationError::SetCountMismatch {
            expected,
            actual: sets.len(),
        });
    }
    sets.iter()
        .map(|s| {
            Ok(PerformedSet {
                reps: Reps::parse_lenient(&s.reps)?,
                weight: Weight::parse_lenient(&s.weight)?,
            })
        })
        .collect()
}

/// Session-wide roll-up over all entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionTotals {
    pub exercises: usize,
    pub sets: u32,
    pub volume: f32,
}

/// Accumulates exercise entries for one sitting until they are committed
/// into the record store.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionBuilder {
    entries: Vec<SessionEntry>,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add_entry(&mut self, entry: SessionEntry) {
        self.entries.push(entry);
    }

    /// Removes the entry at the given position. Entries have no persisted
    /// identity yet, so removal is positional. Out-of-range positions are a
    /// no-op.
    pub fn remove_entry(&mut self, index: usize) -> Option<SessionEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Totals over every individual set of every entry. Both sides of a
    /// unilateral entry count, so its set count is twice the declared one.
    #[must_use]
    pub fn totals(&self) -> SessionTotals {
        let volume = self
            .entries
            .iter()
            .map(|e| e.layout.volume())
            .sum::<f32>();
        SessionTotals {
            exercises: self.entries.len(),
            sets: self.entries.iter().map(|e| e.layout.set_count()).sum(),
            volume: if volume.is_finite() { volume } else { 0.0 },
        }
    }

    /// Converts every entry into a stored record dated `date` and clears
    /// the session. Returns the ids of the created records.
    pub fn commit(
        &mut self,
        date: NaiveDate,
        store: &mut RecordStore,
    ) -> Result<Vec<RecordID>, SessionError> {
        if self.entries.is_empty() {
            return Err(SessionError::Empty);
        }
        let mut ids = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            let id = RecordID::new();
            store.add_record(
                &entry.name,
                WorkoutRecord::new(
                    id,
                    date,
                    entry.category,
                    entry.equipment,
                    entry.muscle,
                    entry.layout,
                ),
            );
            ids.push(id);
        }
        Ok(ids)
    }

    /// Like [`commit`](Self::commit) for callers holding a possibly unset
    /// date.
    pub fn commit_opt(
        &mut self,
        date: Option<NaiveDate>,
        store: &mut RecordStore,
    ) -> Result<Vec<RecordID>, SessionError> {
        self.commit(date.ok_or(SessionError::NoDate)?, store)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{RepsError, WeightError};

    use super::*;

    fn name(value: &str) -> Name {
        Name::new(value).unwrap()
    }

    fn bilateral_input(name_value: &str, sets: &[(&str, &str)]) -> EntryInput {
        EntryInput {
            name: name(name_value),
            category: String::from("push"),
            equipment: String::from("barbell"),
            muscle: None,
            set_count: sets.len(),
            sets: SidesInput::Bilateral {
                sets: sets.iter().map(|(r, w)| SetInput::new(r, w)).collect(),
            },
        }
    }

    fn unilateral_input(
        name_value: &str,
        left: &[(&str, &str)],
        right: &[(&str, &str)],
    ) -> EntryInput {
        EntryInput {
            name: name(name_value),
            category: String::from("legs"),
            equipment: String::from("dumbbell"),
            muscle: None,
            set_count: left.len(),
            sets: SidesInput::Unilateral {
                left: left.iter().map(|(r, w)| SetInput::new(r, w)).collect(),
                right: right.iter().map(|(r, w)| SetInput::new(r, w)).collect(),
            },
        }
    }

    #[test]
    fn test_entry_from_input_computes_heaviest_statistics() {
        let entry = SessionEntry::from_input(bilateral_input(
            "Bench Press",
            &[("8", "60"), ("5", "65"), ("3", "65")],
        ))
        .unwrap();

        assert_eq!(entry.heaviest_weight, Weight::new(65.0).unwrap());
        assert_eq!(entry.heaviest_set_count, 2);
    }

    #[test]
    fn test_entry_from_input_pools_both_sides() {
        let entry = SessionEntry::from_input(unilateral_input(
            "Bulgarian Split Squat",
            &[("10", "24"), ("8", "26")],
            &[("10", "26"), ("8", "26")],
        ))
        .unwrap();

        assert_eq!(entry.heaviest_weight, Weight::new(26.0).unwrap());
        assert_eq!(entry.heaviest_set_count, 3);
    }

    #[rstest]
    #[case(&[("8", "60")], 2, ValidationError::SetCountMismatch { expected: 2, actual: 1 })]
    #[case(&[("8", "60"), ("8", "60"), ("8", "60")], 2, ValidationError::SetCountMismatch { expected: 2, actual: 3 })]
    fn test_entry_from_input_set_count_mismatch(
        #[case] sets: &[(&str, &str)],
        #[case] set_count: usize,
        #[case] expected: ValidationError,
    ) {
        let mut input = bilateral_input("Bench Press", sets);
        input.set_count = set_count;
        assert_eq!(SessionEntry::from_input(input), Err(expected));
    }

    #[rstest]
    #[case(("0", "60"), ValidationError::Reps(RepsError::OutOfRange))]
    #[case(("", "60"), ValidationError::Reps(RepsError::OutOfRange))]
    #[case(("abc", "60"), ValidationError::Reps(RepsError::OutOfRange))]
    #[case(("8", "-5"), ValidationError::Weight(WeightError::OutOfRange))]
    fn test_entry_from_input_invalid_set(
        #[case] set: (&str, &str),
        #[case] expected: ValidationError,
    ) {
        let input = bilateral_input("Bench Press", &[set]);
        assert_eq!(SessionEntry::from_input(input), Err(expected));
    }

    #[test]
    fn test_entry_from_input_unparsable_weight_becomes_zero() {
        let entry =
            SessionEntry::from_input(bilateral_input("Bench Press", &[("8", "x")])).unwrap();
        assert_eq!(entry.heaviest_weight, Weight::default());
    }

    #[test]
    fn test_entry_from_input_validates_each_side() {
        let input = unilateral_input(
            "Bulgarian Split Squat",
            &[("10", "24")],
            &[("0", "24")],
        );
        assert_eq!(
            SessionEntry::from_input(input),
            Err(ValidationError::Reps(RepsError::OutOfRange))
        );
    }

    #[test]
    fn test_entry_from_input_rejects_zero_sets() {
        let input = bilateral_input("Bench Press", &[]);
        assert_eq!(
            SessionEntry::from_input(input),
            Err(ValidationError::NoSets)
        );
    }

    #[test]
    fn test_remove_entry_is_positional() {
        let mut session = SessionBuilder::new();
        session.add_entry(
            SessionEntry::from_input(bilateral_input("Bench Press", &[("8", "60")])).unwrap(),
        );
        session.add_entry(
            SessionEntry::from_input(bilateral_input("Squat", &[("5", "100")])).unwrap(),
        );

        let removed = session.remove_entry(0).unwrap();
        assert_eq!(removed.name, name("Bench Press"));
        assert_eq!(session.entries().len(), 1);
        assert_eq!(session.remove_entry(5), None);
        assert_eq!(session.entries().len(), 1);
    }

    #[test]
    fn test_totals_bilateral() {
        let mut session = SessionBuilder::new();
        session.add_entry(
            SessionEntry::from_input(bilateral_input(
                "Bench Press",
                &[("8", "40"), ("8", "42"), ("6", "45")],
            ))
            .unwrap(),
        );

        let totals = session.totals();
        assert_eq!(totals.exercises, 1);
        assert_eq!(totals.sets, 3);
        assert_approx_eq!(totals.volume, 926.0);
    }

    #[test]
    fn test_totals_count_both_limbs() {
        let mut session = SessionBuilder::new();
        session.add_entry(
            SessionEntry::from_input(unilateral_input(
                "Bulgarian Split Squat",
                &[("10", "20"), ("10", "20")],
                &[("10", "20"), ("10", "20")],
            ))
            .unwrap(),
        );

        let totals = session.totals();
        assert_eq!(totals.exercises, 1);
        assert_eq!(totals.sets, 4);
        assert_approx_eq!(totals.volume, 800.0);
    }

    #[test]
    fn test_totals_of_empty_session() {
        let totals = SessionBuilder::new().totals();
        assert_eq!(totals.exercises, 0);
        assert_eq!(totals.sets, 0);
        assert_approx_eq!(totals.volume, 0.0);
    }

    #[test]
    fn test_commit_appends_records_and_clears_session() {
        let mut store = RecordStore::new();
        let mut session = SessionBuilder::new();
        session.add_entry(
            SessionEntry::from_input(bilateral_input("Bench Press", &[("5", "65")])).unwrap(),
        );
        session.add_entry(
            SessionEntry::from_input(bilateral_input("Squat", &[("5", "100")])).unwrap(),
        );

        let date = NaiveDate::from_ymd_opt(2020, 2, 2).unwrap();
        let ids = session.commit(date, &mut store).unwrap();

        assert_eq!(ids.len(), 2);
        assert!(session.is_empty());
        assert_eq!(store.len(), 2);
        let record = store.most_recent_record(&name("Bench Press")).unwrap();
        assert_eq!(record.id, ids[0]);
        assert_eq!(record.date, date);
        assert_eq!(record.heaviest_weight, Weight::new(65.0).unwrap());
    }

    #[test]
    fn test_commit_empty_session_fails_without_mutation() {
        let mut store = RecordStore::new();
        let mut session = SessionBuilder::new();

        assert_eq!(
            session.commit(NaiveDate::from_ymd_opt(2020, 2, 2).unwrap(), &mut store),
            Err(SessionError::Empty)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_opt_without_date_fails_without_mutation() {
        let mut store = RecordStore::new();
        let mut session = SessionBuilder::new();
        session.add_entry(
            SessionEntry::from_input(bilateral_input("Bench Press", &[("5", "65")])).unwrap(),
        );

        assert_eq!(
            session.commit_opt(None, &mut store),
            Err(SessionError::NoDate)
        );
        assert!(store.is_empty());
        assert_eq!(session.entries().len(), 1);
    }
}
