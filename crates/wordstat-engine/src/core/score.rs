use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::GRID_ROWS;
use crate::InvalidScoreValue;

/// Solve outcome of one player on one puzzle.
///
/// `NotAttempted` is kept as a distinct variant so it can never be averaged
/// in by accident; statistics read numeric values through [`Score::value`],
/// which returns `None` for it.
///
/// Serialized as `null`, `1..=6`, or [`Score::FAILED_VALUE`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
#[serde(into = "Option<u8>", try_from = "Option<u8>")]
pub enum Score {
    /// No cell of the grid holds a guess.
    #[default]
    NotAttempted,
    /// Solved at this 1-based row.
    Solved(u8),
    /// Attempted but no row became all-correct.
    Failed,
}

impl Score {
    /// Numeric stand-in for a failed puzzle.
    #[expect(clippy::cast_possible_truncation)]
    pub const FAILED_VALUE: u8 = GRID_ROWS as u8 + 1;

    /// Numeric outcome, with `Failed` counted as [`Score::FAILED_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_engine::Score;
    ///
    /// assert_eq!(Score::Solved(4).numeric(), Some(4));
    /// assert_eq!(Score::Failed.numeric(), Some(7));
    /// assert_eq!(Score::NotAttempted.numeric(), None);
    /// ```
    #[must_use]
    pub const fn numeric(self) -> Option<u8> {
        match self {
            Score::NotAttempted => None,
            Score::Solved(row) => Some(row),
            Score::Failed => Some(Self::FAILED_VALUE),
        }
    }

    /// Same as [`Score::numeric`], as a float for statistics.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        self.numeric().map(f64::from)
    }

    /// Row value for solved puzzles only.
    #[must_use]
    pub fn solved_value(self) -> Option<f64> {
        match self {
            Score::Solved(row) => Some(f64::from(row)),
            Score::NotAttempted | Score::Failed => None,
        }
    }

    #[must_use]
    pub const fn is_attempted(self) -> bool {
        !matches!(self, Score::NotAttempted)
    }

    /// Inverse of [`Score::numeric`].
    pub fn from_numeric(value: Option<u8>) -> Result<Self, InvalidScoreValue> {
        match value {
            None => Ok(Score::NotAttempted),
            Some(Self::FAILED_VALUE) => Ok(Score::Failed),
            Some(row @ 1..) if usize::from(row) <= GRID_ROWS => Ok(Score::Solved(row)),
            Some(value) => Err(InvalidScoreValue(value)),
        }
    }
}

impl From<Score> for Option<u8> {
    fn from(score: Score) -> Self {
        score.numeric()
    }
}

impl TryFrom<Option<u8>> for Score {
    type Error = InvalidScoreValue;

    fn try_from(value: Option<u8>) -> Result<Self, Self::Error> {
        Score::from_numeric(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NotAttempted => f.pad("-"),
            Score::Solved(row) => f.pad(&row.to_string()),
            Score::Failed => f.pad("X"),
        }
    }
}
