use derive_more::{Display, Into};
use thiserror::Error;

/// Number of repetitions of a performed set.
///
/// A set that has been performed consists of at least one repetition.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Parse raw input, mapping unparsable values to the sentinel 0.
    ///
    /// The sentinel fails the subsequent range check, so incomplete input is
    /// rejected instead of silently recorded as an empty set.
    pub fn parse_lenient(value: &str) -> Result<Self, RepsError> {
        Self::new(value.trim().parse::<u32>().unwrap_or(0))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

/// Weight of a performed set in kg.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }

    /// Parse raw input, mapping unparsable or non-finite values to 0 kg.
    ///
    /// Negative values remain out of range and are rejected.
    pub fn parse_lenient(value: &str) -> Result<Self, WeightError> {
        let parsed_value = value
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        Self::new(parsed_value)
    }

    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// A single performed set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformedSet {
    pub reps: Reps,
    pub weight: Weight,
}

/// Whether a movement is performed with both limbs at once or one limb at a
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Bilateral,
    Unilateral,
}

/// The performed sets of a record, resolved to one shape at construction
/// time.
///
/// `Unilateral` keeps two parallel sequences of equal length, one per side.
/// `Aggregate` covers records imported from older exports that carry only a
/// heaviest weight and no per-set detail.
#[derive(Debug, Clone, PartialEq)]
pub enum SetLayout {
    Bilateral {
        sets: Vec<PerformedSet>,
    },
    Unilateral {
        left: Vec<PerformedSet>,
        right: Vec<PerformedSet>,
    },
    Aggregate {
        weight: Weight,
    },
}

impl SetLayout {
    /// All performed sets, with the left side ordered before the right side.
    #[must_use]
    pub fn sets(&self) -> Vec<&PerformedSet> {
        match self {
            SetLayout::Bilateral { sets } => sets.iter().collect(),
            SetLayout::Unilateral { left, right } => left.iter().chain(right.iter()).collect(),
            SetLayout::Aggregate { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub fn set_count(&self) -> u32 {
        u32::try_from(self.sets().len()).unwrap_or(u32::MAX)
    }

    /// The maximum weight across all sets and the number of sets lifting it,
    /// pooled across both sides.
    #[must_use]
    pub fn heaviest(&self) -> (Weight, u32) {
        if let SetLayout::Aggregate { weight } = self {
            return (*weight, 1);
        }
        let sets = self.sets();
        let heaviest = sets
            .iter()
            .map(|s| s.weight)
            .fold(Weight::default(), Weight::max);
        let count = sets.iter().filter(|s| s.weight == heaviest).count();
        (heaviest, u32::try_from(count).unwrap_or(u32::MAX))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume(&self) -> f32 {
        self.sets()
            .iter()
            .map(|s| u32::from(s.reps) as f32 * f32::from(s.weight))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn set(reps: u32, weight: f32) -> PerformedSet {
        PerformedSet {
            reps: Reps::new(reps).unwrap(),
            weight: Weight::new(weight).unwrap(),
        }
    }

    #[rstest]
    #[case(1, Ok(Reps(1)))]
    #[case(999, Ok(Reps(999)))]
    #[case(0, Err(RepsError::OutOfRange))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] input: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(input), expected);
    }

    #[rstest]
    #[case("12", Ok(Reps(12)))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("4.", Err(RepsError::ParseError))]
    #[case("", Err(RepsError::ParseError))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(input), expected);
    }

    #[rstest]
    #[case("8", Ok(Reps(8)))]
    #[case(" 8 ", Ok(Reps(8)))]
    #[case("", Err(RepsError::OutOfRange))]
    #[case("x", Err(RepsError::OutOfRange))]
    #[case("0", Err(RepsError::OutOfRange))]
    fn test_reps_parse_lenient(#[case] input: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::parse_lenient(input), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(42.5, Ok(Weight(42.5)))]
    #[case(-1.0, Err(WeightError::OutOfRange))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    #[case(f32::NAN, Err(WeightError::OutOfRange))]
    #[case(60.05, Err(WeightError::InvalidResolution))]
    fn test_weight_new(#[case] input: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(input), expected);
    }

    #[rstest]
    #[case("60", Ok(Weight(60.0)))]
    #[case("60.5", Ok(Weight(60.5)))]
    #[case("1000", Err(WeightError::OutOfRange))]
    #[case("60.05", Err(WeightError::InvalidResolution))]
    #[case("", Err(WeightError::ParseError))]
    fn test_weight_from_str(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(input), expected);
    }

    #[rstest]
    #[case("60", Ok(Weight(60.0)))]
    #[case("", Ok(Weight(0.0)))]
    #[case("x", Ok(Weight(0.0)))]
    #[case("NaN", Ok(Weight(0.0)))]
    #[case("-5", Err(WeightError::OutOfRange))]
    fn test_weight_parse_lenient(
        #[case] input: &str,
        #[case] expected: Result<Weight, WeightError>,
    ) {
        assert_eq!(Weight::parse_lenient(input), expected);
    }

    #[rstest]
    #[case(
        SetLayout::Bilateral { sets: vec![set(8, 40.0), set(8, 42.0), set(6, 42.0)] },
        (Weight(42.0), 2)
    )]
    #[case(
        SetLayout::Unilateral {
            left: vec![set(10, 60.0)],
            right: vec![set(10, 60.0)],
        },
        (Weight(60.0), 2)
    )]
    #[case(SetLayout::Aggregate { weight: Weight(80.0) }, (Weight(80.0), 1))]
    #[case(SetLayout::Bilateral { sets: vec![] }, (Weight(0.0), 0))]
    fn test_set_layout_heaviest(#[case] layout: SetLayout, #[case] expected: (Weight, u32)) {
        assert_eq!(layout.heaviest(), expected);
    }

    #[rstest]
    #[case(SetLayout::Bilateral { sets: vec![set(8, 40.0), set(8, 42.0)] }, 2)]
    #[case(
        SetLayout::Unilateral {
            left: vec![set(10, 60.0), set(10, 60.0)],
            right: vec![set(10, 50.0), set(10, 50.0)],
        },
        4
    )]
    #[case(SetLayout::Aggregate { weight: Weight(80.0) }, 0)]
    fn test_set_layout_set_count(#[case] layout: SetLayout, #[case] expected: u32) {
        assert_eq!(layout.set_count(), expected);
    }

    #[test]
    fn test_set_layout_volume() {
        let layout = SetLayout::Bilateral {
            sets: vec![set(8, 40.0), set(8, 42.0), set(6, 45.0)],
        };
        assert_approx_eq!(layout.volume(), 926.0);
    }
}
