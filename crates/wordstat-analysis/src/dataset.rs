//! Input dataset: decoded share texts per sender, plus optional materialized grid stacks.
//!
//! # JSON Layout
//!
//! ```json
//! {
//!   "alice@example.com": {
//!     "1001": "Wordle 1,001 3/6\n\n...",
//!     "1003": "Wordle 1,003 X/6\n\n...",
//!     "grids": [[[0, 1, 3], ...], ...]
//!   },
//!   "bob@example.com": { ... }
//! }
//! ```
//!
//! - Sender order is the order of first appearance in the document and is
//!   preserved (it becomes the player column order).
//! - Every key except [`GRIDS_KEY`] must be a decimal puzzle number no
//!   greater than [`MAX_PUZZLE_NUMBER`].
//! - [`GRIDS_KEY`] holds a `[row][column][puzzle]` stack of symbol codes
//!   (6 rows, 5 columns, one code per puzzle). When present it is
//!   authoritative for that sender.
//!
//! Shape violations in the stack are fatal and reported as [`DatasetError`].

use std::{collections::BTreeMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};
use wordstat_engine::{GRID_COLS, GRID_ROWS, GridShapeError, InvalidSymbolCode, PuzzleGrid};

/// Sentinel key holding the materialized grid stack of a sender.
pub const GRIDS_KEY: &str = "grids";

/// Highest puzzle number a dataset key may name.
///
/// Every player column spans up to the highest puzzle number seen, so keys
/// beyond this are rejected instead of sizing the analysis after them.
pub const MAX_PUZZLE_NUMBER: usize = 99_999;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    #[display("puzzle key {key:?} is not a puzzle number in 0..={}", MAX_PUZZLE_NUMBER)]
    InvalidPuzzleKey { key: String },
    #[display("invalid grid stack: {_0}")]
    GridShape(GridShapeError),
    #[display("invalid grid stack: cell ({row}, {col}) has {found} puzzles, expected {expected}")]
    RaggedStack {
        row: usize,
        col: usize,
        expected: usize,
        found: usize,
    },
    #[display("invalid grid stack: {_0}")]
    InvalidSymbol(InvalidSymbolCode),
}

/// Everything one sender contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderRecord {
    pub sender: String,
    /// Decoded share text per puzzle number.
    pub texts: BTreeMap<usize, String>,
    /// Materialized grid per puzzle index, if the sender carried one.
    pub grids: Option<Vec<PuzzleGrid>>,
}

impl SenderRecord {
    #[must_use]
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            ..Self::default()
        }
    }

    /// Number of puzzle slots this sender spans: one past the highest puzzle
    /// number it mentions, or the length of its materialized stack.
    #[must_use]
    pub fn extent(&self) -> usize {
        let from_texts = self
            .texts
            .keys()
            .next_back()
            .map_or(0, |puzzle| puzzle.saturating_add(1));
        let from_grids = self.grids.as_ref().map_or(0, Vec::len);
        from_texts.max(from_grids)
    }
}

/// Senders in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset {
    records: Vec<SenderRecord>,
}

impl RawDataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[SenderRecord] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds a share text; returns `false` if the sender already had one for
    /// this puzzle (the existing text is kept).
    pub fn insert_text(&mut self, sender: &str, puzzle: usize, text: impl Into<String>) -> bool {
        let record = self.record_mut(sender);
        if record.texts.contains_key(&puzzle) {
            return false;
        }
        record.texts.insert(puzzle, text.into());
        true
    }

    /// Sets the materialized stack of a sender unless one is already present.
    pub fn insert_grids(&mut self, sender: &str, grids: Vec<PuzzleGrid>) {
        self.record_mut(sender).grids.get_or_insert(grids);
    }

    fn record_mut(&mut self, sender: &str) -> &mut SenderRecord {
        let index = match self.records.iter().position(|r| r.sender == sender) {
            Some(index) => index,
            None => {
                self.records.push(SenderRecord::new(sender));
                self.records.len() - 1
            }
        };
        &mut self.records[index]
    }

    fn merge(&mut self, incoming: SenderRecord) {
        let record = self.record_mut(&incoming.sender);
        for (puzzle, text) in incoming.texts {
            record.texts.entry(puzzle).or_insert(text);
        }
        if let Some(grids) = incoming.grids {
            record.grids.get_or_insert(grids);
        }
    }
}

/// Converts a `[row][column][puzzle]` code stack into one grid per puzzle.
///
/// # Examples
///
/// ```
/// use wordstat_analysis::dataset::materialize_stack;
/// use wordstat_engine::Score;
///
/// // two puzzles: the first solved on row 1, the second untouched
/// let mut codes = vec![vec![vec![0, 0]; 5]; 6];
/// for col in 0..5 {
///     codes[0][col][0] = 3;
/// }
/// let grids = materialize_stack(&codes).unwrap();
/// assert_eq!(grids.len(), 2);
/// assert_eq!(grids[0].score(), Score::Solved(1));
/// assert_eq!(grids[1].score(), Score::NotAttempted);
/// ```
pub fn materialize_stack(codes: &[Vec<Vec<u8>>]) -> Result<Vec<PuzzleGrid>, DatasetError> {
    if codes.len() != GRID_ROWS {
        let cols = codes.first().map_or(0, Vec::len);
        return Err(DatasetError::GridShape(GridShapeError {
            rows: codes.len(),
            cols,
        }));
    }
    if let Some(row) = codes.iter().find(|row| row.len() != GRID_COLS) {
        return Err(DatasetError::GridShape(GridShapeError {
            rows: codes.len(),
            cols: row.len(),
        }));
    }

    let expected = codes[0][0].len();
    for (row, cols) in codes.iter().enumerate() {
        for (col, puzzles) in cols.iter().enumerate() {
            if puzzles.len() != expected {
                return Err(DatasetError::RaggedStack {
                    row,
                    col,
                    expected,
                    found: puzzles.len(),
                });
            }
        }
    }

    (0..expected)
        .map(|puzzle| {
            let mut grid = [[0; GRID_COLS]; GRID_ROWS];
            for (row, cells) in grid.iter_mut().enumerate() {
                for (col, cell) in cells.iter_mut().enumerate() {
                    *cell = codes[row][col][puzzle];
                }
            }
            PuzzleGrid::from_codes(&grid).map_err(DatasetError::InvalidSymbol)
        })
        .collect()
}

/// Inverse of [`materialize_stack`].
#[must_use]
pub fn stack_codes(grids: &[PuzzleGrid]) -> Vec<Vec<Vec<u8>>> {
    let mut codes = vec![vec![Vec::with_capacity(grids.len()); GRID_COLS]; GRID_ROWS];
    for grid in grids {
        for (row, cells) in grid.codes().iter().enumerate() {
            for (col, code) in cells.iter().enumerate() {
                codes[row][col].push(*code);
            }
        }
    }
    codes
}

impl<'de> Deserialize<'de> for RawDataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = RawDataset;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from sender to puzzle entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut dataset = RawDataset::new();
        while let Some((sender, entries)) = map.next_entry::<String, SenderEntries>()? {
            dataset.merge(SenderRecord {
                sender,
                texts: entries.texts,
                grids: entries.grids,
            });
        }
        Ok(dataset)
    }
}

#[derive(Default)]
struct SenderEntries {
    texts: BTreeMap<usize, String>,
    grids: Option<Vec<PuzzleGrid>>,
}

impl<'de> Deserialize<'de> for SenderEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SenderEntriesVisitor)
    }
}

struct SenderEntriesVisitor;

impl<'de> Visitor<'de> for SenderEntriesVisitor {
    type Value = SenderEntries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from puzzle number to share text")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = SenderEntries::default();
        while let Some(key) = map.next_key::<String>()? {
            if key == GRIDS_KEY {
                let codes = map.next_value::<Vec<Vec<Vec<u8>>>>()?;
                let grids = materialize_stack(&codes).map_err(de::Error::custom)?;
                entries.grids.get_or_insert(grids);
                continue;
            }
            let Some(puzzle) = key
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|puzzle| *puzzle <= MAX_PUZZLE_NUMBER)
            else {
                return Err(de::Error::custom(DatasetError::InvalidPuzzleKey { key }));
            };
            let text = map.next_value::<String>()?;
            entries.texts.entry(puzzle).or_insert(text);
        }
        Ok(entries)
    }
}

impl Serialize for RawDataset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.sender, &RecordEntries(record))?;
        }
        map.end()
    }
}

struct RecordEntries<'a>(&'a SenderRecord);

impl Serialize for RecordEntries<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let record = self.0;
        let len = record.texts.len() + usize::from(record.grids.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (puzzle, text) in &record.texts {
            map.serialize_entry(&puzzle.to_string(), text)?;
        }
        if let Some(grids) = &record.grids {
            map.serialize_entry(GRIDS_KEY, &stack_codes(grids))?;
        }
        map.end()
    }
}
