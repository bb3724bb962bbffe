//! Non-fatal conditions reported while loading data or computing statistics.
//!
//! Warnings never abort a computation: the affected player's result for that
//! statistic is omitted and every other result proceeds normally. Each
//! warning is logged through `tracing` when it is recorded and is also kept
//! in the result so callers can surface it.

use serde::Serialize;
use wordstat_engine::Score;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Fewer attempted puzzles than the rolling-average window.
    #[display(
        "{player}: rolling average needs {window} attempted puzzles, only {attempted} available"
    )]
    InsufficientRollingData {
        player: String,
        attempted: usize,
        window: usize,
    },
    /// Not enough distinct attempted puzzles to fit a trend line.
    #[display("{player}: linear trend needs 2 distinct attempted puzzles, only {attempted} available")]
    InsufficientTrendData { player: String, attempted: usize },
    /// Two senders merged into one player both reported the same puzzle.
    #[display("{player}: puzzle {puzzle} from {sender} duplicates an earlier entry, keeping the first")]
    DuplicatePuzzle {
        player: String,
        sender: String,
        puzzle: usize,
    },
    /// The share header names a different puzzle than the entry key.
    #[display("{sender}: entry {puzzle} carries a header for puzzle {header}")]
    PuzzleNumberMismatch {
        sender: String,
        puzzle: usize,
        header: usize,
    },
    /// The result printed in the share header disagrees with the grid.
    #[display("{sender}: puzzle {puzzle} claims {claimed} but the grid scores {derived}")]
    ClaimedScoreMismatch {
        sender: String,
        puzzle: usize,
        claimed: Score,
        derived: Score,
    },
}

/// Logs `warning` and appends it to `warnings`.
pub(crate) fn record(warnings: &mut Vec<AnalysisWarning>, warning: AnalysisWarning) {
    tracing::warn!("{warning}");
    warnings.push(warning);
}
