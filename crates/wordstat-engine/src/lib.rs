//! Puzzle grid encoding for shared word-puzzle results.
//!
//! - [`Symbol`]: the four cell outcomes and their canonical codes / glyphs
//! - [`PuzzleGrid`]: fixed 6×5 grid built from a decoded share text
//! - [`Score`]: solve outcome derived from a grid
//! - [`ShareHeader`]: the `Wordle <n> <r>/6` line of a share text

pub use self::core::*;

pub mod core;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid symbol code {_0} (expected 0..=3)")]
pub struct InvalidSymbolCode(#[error(not(source))] pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid score value {_0} (expected 1..=7 or null)")]
pub struct InvalidScoreValue(#[error(not(source))] pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("grid must be 6x5, got {rows}x{cols}")]
pub struct GridShapeError {
    pub rows: usize,
    pub cols: usize,
}
