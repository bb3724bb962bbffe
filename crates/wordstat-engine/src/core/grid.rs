use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{score::Score, symbol::Symbol};
use crate::{GridShapeError, InvalidSymbolCode};

/// Maximum number of guesses in a puzzle.
pub const GRID_ROWS: usize = 6;
/// Number of letters per guess.
pub const GRID_COLS: usize = 5;
/// Total number of cells in a grid.
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// Row sum of a fully correct guess (`Correct` code times the row width).
#[expect(clippy::cast_possible_truncation)]
pub const SOLVED_ROW_SUM: u8 = Symbol::Correct.code() * GRID_COLS as u8;

/// One guess row.
pub type GridRow = [Symbol; GRID_COLS];

/// Fixed 6×5 grid of symbols for one puzzle attempt.
///
/// Guesses fill the grid row-major from `[0][0]`; rows that were never used
/// stay all-[`Symbol::Empty`]. Grids are immutable once built.
///
/// # Layout
///
/// ```text
///        col 0  1  2  3  4
/// row 0  [guess 1 feedback]
/// row 1  [guess 2 feedback]
///  ...
/// row 5  [guess 6 feedback]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleGrid {
    rows: [GridRow; GRID_ROWS],
}

impl PuzzleGrid {
    /// Grid of a puzzle that was not attempted.
    pub const EMPTY: Self = Self {
        rows: [[Symbol::Empty; GRID_COLS]; GRID_ROWS],
    };

    /// Encodes a decoded share text into a grid.
    ///
    /// Characters that are not one of the three feedback glyphs are skipped
    /// without consuming a cell. Filling stops after [`GRID_CELLS`] cells;
    /// any further glyphs are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_engine::{PuzzleGrid, Score};
    ///
    /// let text = "Wordle 1,001 2/6\n\n\u{2B1C}\u{1F7E8}\u{2B1C}\u{2B1C}\u{2B1C}\n\
    ///             \u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}";
    /// let grid = PuzzleGrid::encode(text);
    /// assert_eq!(grid.score(), Score::Solved(2));
    /// ```
    #[must_use]
    pub fn encode(text: &str) -> Self {
        Self::from_symbols(text.chars().filter_map(Symbol::classify))
    }

    /// Fills a grid row-major from already classified symbols.
    #[must_use]
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut grid = Self::EMPTY;
        for (idx, symbol) in symbols.into_iter().take(GRID_CELLS).enumerate() {
            grid.rows[idx / GRID_COLS][idx % GRID_COLS] = symbol;
        }
        grid
    }

    /// Builds a grid from canonical integer codes.
    pub fn from_codes(codes: &[[u8; GRID_COLS]; GRID_ROWS]) -> Result<Self, InvalidSymbolCode> {
        let mut grid = Self::EMPTY;
        for (row, codes) in grid.rows.iter_mut().zip(codes) {
            for (cell, &code) in row.iter_mut().zip(codes) {
                *cell = Symbol::from_code(code)?;
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn rows(&self) -> &[GridRow; GRID_ROWS] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &GridRow {
        &self.rows[row]
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Symbol {
        self.rows[row][col]
    }

    /// Integer codes of the whole grid.
    #[must_use]
    pub fn codes(&self) -> [[u8; GRID_COLS]; GRID_ROWS] {
        self.rows.map(|row| row.map(Symbol::code))
    }

    /// Sum of the cell codes of every row.
    #[must_use]
    pub fn row_sums(&self) -> [u8; GRID_ROWS] {
        self.rows
            .map(|row| row.iter().map(|symbol| symbol.code()).sum::<u8>())
    }

    /// Sum of every cell code in the grid.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.row_sums().iter().copied().map(u32::from).sum()
    }

    /// Returns `true` if no cell holds a guess.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.total() == 0
    }

    /// Number of rows that contain at least one guess.
    #[must_use]
    pub fn used_rows(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|s| !s.is_empty()))
            .count()
    }

    /// 1-based row at which every cell first became `Correct`.
    ///
    /// The earliest such row wins if more than one exists.
    #[must_use]
    pub fn solved_row(&self) -> Option<u8> {
        (1..)
            .zip(self.row_sums())
            .find_map(|(row, sum)| (sum == SOLVED_ROW_SUM).then_some(row))
    }

    /// Derives the solve score of this grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_engine::{PuzzleGrid, Score, Symbol};
    ///
    /// assert_eq!(PuzzleGrid::EMPTY.score(), Score::NotAttempted);
    /// let one_guess = PuzzleGrid::from_symbols([Symbol::Absent]);
    /// assert_eq!(one_guess.score(), Score::Failed);
    /// ```
    #[must_use]
    pub fn score(&self) -> Score {
        match self.solved_row() {
            Some(row) => Score::Solved(row),
            None if self.is_blank() => Score::NotAttempted,
            None => Score::Failed,
        }
    }
}

impl fmt::Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for symbol in row {
                write!(f, "{}", symbol.glyph())?;
            }
        }
        Ok(())
    }
}

/// Parses the rendered form produced by [`fmt::Display`].
///
/// Each line must hold exactly five display glyphs (including the hollow
/// empty glyph). Missing trailing lines are treated as empty rows.
impl FromStr for PuzzleGrid {
    type Err = GridShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines().filter(|line| !line.trim().is_empty()).collect::<Vec<_>>();
        if lines.len() > GRID_ROWS {
            return Err(GridShapeError {
                rows: lines.len(),
                cols: GRID_COLS,
            });
        }
        let mut grid = Self::EMPTY;
        for (row, line) in grid.rows.iter_mut().zip(&lines) {
            let symbols = line
                .trim()
                .chars()
                .map(Symbol::from_glyph)
                .collect::<Option<Vec<_>>>()
                .ok_or(GridShapeError {
                    rows: lines.len(),
                    cols: 0,
                })?;
            *row = symbols.try_into().map_err(|symbols: Vec<Symbol>| GridShapeError {
                rows: lines.len(),
                cols: symbols.len(),
            })?;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(symbols: &[Symbol]) -> String {
        symbols.iter().map(|s| s.glyph()).collect()
    }

    #[test]
    fn test_encode_is_deterministic() {
        let text = format!(
            "Wordle 812 3/6\r\n\r\n{}\r\n{}\r\n{}",
            glyphs(&[Symbol::Absent; 5]),
            glyphs(&[Symbol::Present, Symbol::Absent, Symbol::Correct, Symbol::Absent, Symbol::Absent]),
            glyphs(&[Symbol::Correct; 5]),
        );
        let first = PuzzleGrid::encode(&text);
        let second = PuzzleGrid::encode(&text);
        assert_eq!(first, second);
        assert_eq!(first.codes(), second.codes());
        assert_eq!(first.score(), Score::Solved(3));
    }

    #[test]
    fn test_encode_skips_line_breaks_without_consuming_cells() {
        let text = format!("\n{}\n \n{}", glyphs(&[Symbol::Absent; 3]), glyphs(&[Symbol::Correct; 3]));
        let grid = PuzzleGrid::encode(&text);
        assert_eq!(
            grid.row(0),
            &[
                Symbol::Absent,
                Symbol::Absent,
                Symbol::Absent,
                Symbol::Correct,
                Symbol::Correct,
            ]
        );
        assert_eq!(grid.row(1)[0], Symbol::Correct);
        assert_eq!(grid.row(1)[1], Symbol::Empty);
    }

    #[test]
    fn test_encode_saturates_at_thirty_cells() {
        let cycle = [Symbol::Absent, Symbol::Present, Symbol::Correct, Symbol::Present];
        let forty = (0..40).map(|i| cycle[i % cycle.len()]).collect::<Vec<_>>();
        let long = PuzzleGrid::encode(&glyphs(&forty));
        let truncated = PuzzleGrid::encode(&glyphs(&forty[..GRID_CELLS]));
        assert_eq!(long, truncated);
    }

    #[test]
    fn test_encode_empty_and_garbage_input() {
        assert_eq!(PuzzleGrid::encode(""), PuzzleGrid::EMPTY);
        assert_eq!(PuzzleGrid::encode("no glyphs here\n"), PuzzleGrid::EMPTY);
        assert_eq!(PuzzleGrid::EMPTY.score(), Score::NotAttempted);
    }

    #[test]
    fn test_solved_row_detection() {
        let mut symbols = vec![Symbol::Absent; 10];
        symbols.extend([Symbol::Correct; 5]);
        symbols.extend([Symbol::Present; 5]);
        let grid = PuzzleGrid::from_symbols(symbols);
        assert_eq!(grid.solved_row(), Some(3));
        assert_eq!(grid.score(), Score::Solved(3));
    }

    #[test]
    fn test_earliest_solved_row_wins() {
        let grid = PuzzleGrid::from_symbols([Symbol::Correct; 10]);
        assert_eq!(grid.score(), Score::Solved(1));
    }

    #[test]
    fn test_single_cell_is_failed() {
        let grid = PuzzleGrid::from_symbols([Symbol::Present]);
        assert_eq!(grid.total(), 2);
        assert_eq!(grid.score(), Score::Failed);
    }

    #[test]
    fn test_six_wrong_rows_is_failed() {
        let grid = PuzzleGrid::from_symbols([Symbol::Present; GRID_CELLS]);
        assert_eq!(grid.used_rows(), GRID_ROWS);
        assert_eq!(grid.score(), Score::Failed);
    }

    #[test]
    fn test_from_codes_rejects_unknown_code() {
        let mut codes = [[0; GRID_COLS]; GRID_ROWS];
        codes[2][4] = 5;
        assert!(PuzzleGrid::from_codes(&codes).is_err());
        codes[2][4] = 3;
        assert_eq!(PuzzleGrid::from_codes(&codes).unwrap().cell(2, 4), Symbol::Correct);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let grid = PuzzleGrid::from_symbols(
            [Symbol::Absent, Symbol::Present]
                .into_iter()
                .chain([Symbol::Correct; 8]),
        );
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), GRID_ROWS);
        assert_eq!(rendered.parse::<PuzzleGrid>().unwrap(), grid);
    }

    #[test]
    fn test_parse_rejects_short_rows() {
        let err = glyphs(&[Symbol::Absent; 4]).parse::<PuzzleGrid>().unwrap_err();
        assert_eq!(err.cols, 4);
    }

    #[test]
    fn test_serialize_as_codes() {
        let grid = PuzzleGrid::from_symbols([Symbol::Correct; 5]);
        let json = serde_json::to_value(grid).unwrap();
        assert_eq!(json[0], serde_json::json!([3, 3, 3, 3, 3]));
        assert_eq!(json[1], serde_json::json!([0, 0, 0, 0, 0]));
    }
}
