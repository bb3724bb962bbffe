use std::num::NonZeroUsize;

use serde::Serialize;
use wordstat_stats::rolling::moving_average;

use crate::{
    matrix::ScoreMatrix,
    warning::{self, AnalysisWarning},
};

/// Moving average ending at an attempted puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingPoint {
    pub puzzle: usize,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRolling {
    pub player: String,
    /// One point per complete window over the attempted puzzles.
    pub points: Vec<RollingPoint>,
    /// `points` spread over every puzzle number: each puzzle carries the
    /// next defined average at or after it.
    pub filled: Vec<Option<f64>>,
}

/// Trailing moving average of each player's attempted scores.
///
/// Unattempted puzzles are dropped before averaging and failures count as
/// [`Score::FAILED_VALUE`](wordstat_engine::Score::FAILED_VALUE). The window
/// advances in puzzle-number order over attempts only, so it spans `window`
/// attempts regardless of gaps between them.
///
/// A player with fewer than `window` attempts gets no points, an all-`None`
/// filled column and an [`AnalysisWarning::InsufficientRollingData`].
#[must_use]
pub fn rolling(
    matrix: &ScoreMatrix,
    window: NonZeroUsize,
    warnings: &mut Vec<AnalysisWarning>,
) -> Vec<PlayerRolling> {
    let window = window.get();
    matrix
        .players()
        .iter()
        .enumerate()
        .map(|(index, player)| {
            let (puzzles, values): (Vec<_>, Vec<_>) = matrix.attempted(index).unzip();
            if values.len() < window {
                warning::record(
                    warnings,
                    AnalysisWarning::InsufficientRollingData {
                        player: player.clone(),
                        attempted: values.len(),
                        window,
                    },
                );
            }

            let points = puzzles[(window - 1).min(puzzles.len())..]
                .iter()
                .zip(moving_average(&values, window))
                .map(|(&puzzle, average)| RollingPoint { puzzle, average })
                .collect::<Vec<_>>();
            PlayerRolling {
                player: player.clone(),
                filled: back_fill(&points, matrix.num_puzzles()),
                points,
            }
        })
        .collect()
}

fn back_fill(points: &[RollingPoint], num_puzzles: usize) -> Vec<Option<f64>> {
    let mut filled = vec![None; num_puzzles];
    let mut next = points.iter().rev().peekable();
    let mut carry = None;
    for puzzle in (0..num_puzzles).rev() {
        if let Some(point) = next.next_if(|point| point.puzzle == puzzle) {
            carry = Some(point.average);
        }
        filled[puzzle] = carry;
    }
    filled
}

#[cfg(test)]
mod tests {
    use wordstat_engine::Score;

    use super::*;

    fn window(size: usize) -> NonZeroUsize {
        NonZeroUsize::new(size).unwrap()
    }

    #[test]
    fn test_averages_skip_gaps_and_back_fill() {
        let scores = vec![
            Score::NotAttempted,
            Score::Solved(2),
            Score::Solved(4),
            Score::NotAttempted,
            Score::Solved(6),
            Score::Failed,
            Score::NotAttempted,
        ];
        let matrix = ScoreMatrix::from_columns([("a", scores)]);
        let mut warnings = vec![];
        let result = rolling(&matrix, window(3), &mut warnings);

        assert!(warnings.is_empty());
        let points = &result[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], RollingPoint { puzzle: 4, average: 4.0 });
        assert_eq!(points[1].puzzle, 5);
        assert!((points[1].average - 17.0 / 3.0).abs() < 1e-12);

        let filled = &result[0].filled;
        assert_eq!(filled[..5], [Some(4.0); 5]);
        assert_eq!(filled[5], Some(points[1].average));
        assert_eq!(filled[6], None);
    }

    #[test]
    fn test_window_boundary() {
        let short = vec![Score::Solved(3); 6];
        let exact = vec![Score::Solved(3); 7];
        let matrix = ScoreMatrix::from_columns([("short", short), ("exact", exact)]);
        let mut warnings = vec![];
        let result = rolling(&matrix, window(7), &mut warnings);

        assert!(result[0].points.is_empty());
        assert!(result[0].filled.iter().all(Option::is_none));
        assert_eq!(result[0].filled.len(), 7);
        assert_eq!(
            warnings,
            [AnalysisWarning::InsufficientRollingData {
                player: "short".to_owned(),
                attempted: 6,
                window: 7,
            }]
        );

        assert_eq!(result[1].points, [RollingPoint { puzzle: 6, average: 3.0 }]);
    }

    #[test]
    fn test_player_without_attempts() {
        let matrix = ScoreMatrix::from_columns([("a", vec![Score::Solved(1)]), ("b", vec![])]);
        let mut warnings = vec![];
        let result = rolling(&matrix, window(1), &mut warnings);
        assert_eq!(result[0].filled, [Some(1.0)]);
        assert_eq!(result[1].filled, [None]);
        assert_eq!(warnings.len(), 1);
    }
}
