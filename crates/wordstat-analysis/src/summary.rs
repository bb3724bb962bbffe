//! Per-player participation and score summary.
//!
//! Gaps are counted only between a player's first and last attempt: puzzles
//! published before a player started or after they stopped are not misses.

use serde::Serialize;
use wordstat_engine::{GRID_ROWS, Score};
use wordstat_stats::descriptive::{self, DescriptiveStats};

use crate::matrix::ScoreMatrix;

/// How often each outcome occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreDistribution {
    /// `solved[i]` counts solves on row `i + 1`.
    pub solved: [usize; GRID_ROWS],
    pub failed: usize,
}

impl ScoreDistribution {
    /// Solve rows outside `1..=6` are not counted.
    fn add(&mut self, score: Score) {
        match score {
            Score::Solved(row) => {
                if let Some(count) = usize::from(row)
                    .checked_sub(1)
                    .and_then(|idx| self.solved.get_mut(idx))
                {
                    *count += 1;
                }
            }
            Score::Failed => self.failed += 1,
            Score::NotAttempted => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummary {
    pub player: String,
    pub attempted: usize,
    pub first_puzzle: Option<usize>,
    pub last_puzzle: Option<usize>,
    /// Puzzles skipped between the first and last attempt.
    pub missed: usize,
    /// Longest run of consecutive skipped puzzles between the first and last attempt.
    pub longest_gap: usize,
    /// Longest run of consecutive attempted puzzles.
    pub longest_streak: usize,
    /// Lowest score achieved (failures rank last).
    pub best: Option<Score>,
    /// Mean score with failures counted as 7.
    pub mean: Option<f64>,
    /// Median of the same values as `mean`.
    pub median: Option<f64>,
    /// Population standard deviation of the same values as `mean`.
    pub std_dev: Option<f64>,
    /// Distance between the worst and best value, failures counted as 7.
    pub range: Option<f64>,
    /// Mean solve row over solved puzzles only.
    pub mean_solved: Option<f64>,
    /// Mean distance in puzzle numbers between consecutive attempts.
    pub mean_gap: Option<f64>,
    pub distribution: ScoreDistribution,
}

/// Summarizes every player column of `matrix`.
///
/// # Examples
///
/// ```
/// use wordstat_analysis::{matrix::ScoreMatrix, summary::summarize};
/// use wordstat_engine::Score;
///
/// let matrix = ScoreMatrix::from_columns([(
///     "a",
///     vec![Score::NotAttempted, Score::Solved(3), Score::NotAttempted, Score::Failed],
/// )]);
/// let summary = &summarize(&matrix)[0];
/// assert_eq!(summary.attempted, 2);
/// assert_eq!(summary.missed, 1);
/// assert_eq!(summary.mean, Some(5.0));
/// assert_eq!(summary.mean_solved, Some(3.0));
/// ```
#[must_use]
pub fn summarize(matrix: &ScoreMatrix) -> Vec<PlayerSummary> {
    matrix
        .columns()
        .map(|(player, scores)| summarize_player(player, scores))
        .collect()
}

#[expect(clippy::cast_precision_loss)]
fn summarize_player(player: &str, scores: &[Score]) -> PlayerSummary {
    let attempted = scores
        .iter()
        .enumerate()
        .filter(|(_, score)| score.is_attempted())
        .map(|(puzzle, _)| puzzle)
        .collect::<Vec<_>>();

    let steps = attempted
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect::<Vec<_>>();
    let missed = steps.iter().map(|step| step - 1).sum();
    let longest_gap = steps.iter().map(|step| step - 1).max().unwrap_or(0);
    let longest_streak = if attempted.is_empty() {
        0
    } else {
        steps
            .split(|&step| step != 1)
            .map(|run| run.len() + 1)
            .max()
            .unwrap_or(1)
    };
    let mean_gap = descriptive::mean(steps.iter().map(|&step| step as f64));

    let stats = DescriptiveStats::new(scores.iter().filter_map(|score| score.value()));
    let mut distribution = ScoreDistribution::default();
    for score in scores {
        distribution.add(*score);
    }

    PlayerSummary {
        player: player.to_owned(),
        attempted: attempted.len(),
        first_puzzle: attempted.first().copied(),
        last_puzzle: attempted.last().copied(),
        missed,
        longest_gap,
        longest_streak,
        best: scores
            .iter()
            .copied()
            .filter(|score| score.is_attempted())
            .min_by_key(|score| score.numeric()),
        mean: stats.as_ref().map(|s| s.mean),
        median: stats.as_ref().map(|s| s.median),
        std_dev: stats.as_ref().map(|s| s.std_dev),
        range: stats.as_ref().map(|s| s.max - s.min),
        mean_solved: descriptive::mean(scores.iter().filter_map(|score| score.solved_value())),
        mean_gap,
        distribution,
    }
}
