//! Most frequent guess-feedback rows.
//!
//! For every guess row the 5-cell feedback patterns of all players and
//! puzzles are pooled and ranked by exact-match frequency. The all-empty
//! pattern (an unused row) is never counted.

use arrayvec::ArrayVec;
use serde::Serialize;
use wordstat_engine::{GRID_ROWS, GridRow, Symbol};
use wordstat_stats::frequency::FrequencyTable;

use crate::store::PlayerStack;

/// Number of patterns reported per row.
pub const TOP_PATTERNS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternFrequency {
    pub pattern: GridRow,
    pub count: usize,
    /// `count` over all non-empty patterns observed on the row.
    pub fraction: f64,
}

impl PatternFrequency {
    /// Feedback glyphs of the pattern.
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.pattern.iter().map(|symbol| symbol.glyph()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowPatterns {
    /// 1-based guess row.
    pub row: usize,
    /// Non-empty patterns observed on this row.
    pub total: usize,
    /// Distinct non-empty patterns observed on this row.
    pub distinct: usize,
    /// Most frequent first; equal counts order by ascending symbol codes.
    pub top: ArrayVec<PatternFrequency, TOP_PATTERNS>,
}

/// Ranks the feedback patterns of each guess row.
///
/// # Examples
///
/// ```
/// use wordstat_analysis::{patterns::frequent_patterns, store::PlayerStack};
/// use wordstat_engine::PuzzleGrid;
///
/// let mut ann = PlayerStack::new("Ann");
/// ann.insert(0, PuzzleGrid::encode(&"\u{1F7E9}".repeat(5)));
/// ann.insert(1, PuzzleGrid::encode(&"\u{1F7E9}".repeat(5)));
/// let rows = frequent_patterns(&[ann]);
/// assert_eq!(rows.len(), 6);
/// assert_eq!(rows[0].top[0].count, 2);
/// assert_eq!(rows[0].top[0].fraction, 1.0);
/// assert!(rows[1].top.is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn frequent_patterns(players: &[PlayerStack]) -> Vec<RowPatterns> {
    (0..GRID_ROWS)
        .map(|row| {
            let table = players
                .iter()
                .flat_map(|player| player.grids().map(move |(_, grid)| *grid.row(row)))
                .filter(|pattern| pattern.iter().any(|symbol| *symbol != Symbol::Empty))
                .collect::<FrequencyTable<GridRow>>();
            let total = table.total();
            let top = table
                .ranked()
                .into_iter()
                .take(TOP_PATTERNS)
                .map(|(pattern, count)| PatternFrequency {
                    pattern,
                    count,
                    fraction: count as f64 / total as f64,
                })
                .collect();
            RowPatterns {
                row: row + 1,
                total,
                distinct: table.distinct(),
                top,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wordstat_engine::PuzzleGrid;

    use super::*;

    const A: &str = "\u{2B1C}";
    const P: &str = "\u{1F7E8}";
    const C: &str = "\u{1F7E9}";

    fn stack(name: &str, rows: &[&str]) -> PlayerStack {
        let mut stack = PlayerStack::new(name);
        for (puzzle, text) in rows.iter().enumerate() {
            stack.insert(puzzle, PuzzleGrid::encode(text));
        }
        stack
    }

    #[test]
    fn test_ranking_and_tie_break() {
        let absent = A.repeat(5);
        let present = P.repeat(5);
        let mixed = format!("{C}{A}{A}{A}{A}");
        let ann = stack("Ann", &[&present, &absent, &mixed]);
        let bob = stack("Bob", &[&present, &absent, ""]);

        let rows = frequent_patterns(&[ann, bob]);
        let first = &rows[0];
        assert_eq!((first.total, first.distinct), (5, 3));
        // absent and present both occur twice; absent has the lower codes
        assert_eq!(first.top[0].pattern, [Symbol::Absent; 5]);
        assert_eq!(first.top[1].pattern, [Symbol::Present; 5]);
        assert_eq!(first.top[2].glyphs(), mixed);
        assert!((first.top[0].fraction - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_pattern_never_ranked() {
        let ann = stack("Ann", &["", "", A]);
        let rows = frequent_patterns(&[ann]);
        for row in &rows {
            assert!(
                row.top
                    .iter()
                    .all(|freq| freq.pattern != [Symbol::Empty; 5])
            );
            let sum = row.top.iter().map(|freq| freq.fraction).sum::<f64>();
            assert!(sum <= 1.0 + 1e-12);
        }
        // the single cell still forms a non-empty pattern
        assert_eq!(rows[0].total, 1);
        assert_eq!(
            rows[0].top[0].pattern,
            [
                Symbol::Absent,
                Symbol::Empty,
                Symbol::Empty,
                Symbol::Empty,
                Symbol::Empty
            ]
        );
    }

    #[test]
    fn test_only_top_six_reported() {
        let texts = (0..8)
            .map(|n| {
                (0..5)
                    .map(|col| if (n >> (col % 3)) & 1 == 1 { C } else { A })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        let refs = texts.iter().map(String::as_str).collect::<Vec<_>>();
        let rows = frequent_patterns(&[stack("Ann", &refs)]);
        assert_eq!(rows[0].total, 8);
        assert_eq!(rows[0].top.len(), TOP_PATTERNS);
        let sum = rows[0].top.iter().map(|freq| freq.fraction).sum::<f64>();
        assert!(sum < 1.0);
    }
}
