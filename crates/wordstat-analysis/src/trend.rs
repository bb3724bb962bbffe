use serde::Serialize;
use wordstat_stats::regression::LinearFit;

use crate::{
    matrix::ScoreMatrix,
    warning::{self, AnalysisWarning},
};

/// Least-squares trend of one player's scores against puzzle number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerTrend {
    pub player: String,
    pub slope: f64,
    pub intercept: f64,
    /// First attempted puzzle; `predicted[0]` belongs to it.
    pub first_puzzle: usize,
    /// Predicted score for every puzzle from the first to the last attempt.
    pub predicted: Vec<f64>,
}

/// Fits each player's attempted scores (failures as 7) against puzzle number.
///
/// Players with fewer than two distinct attempted puzzles are omitted with
/// an [`AnalysisWarning::InsufficientTrendData`].
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn trends(matrix: &ScoreMatrix, warnings: &mut Vec<AnalysisWarning>) -> Vec<PlayerTrend> {
    let mut trends = vec![];
    for (index, player) in matrix.players().iter().enumerate() {
        let points = matrix
            .attempted(index)
            .map(|(puzzle, value)| (puzzle as f64, value))
            .collect::<Vec<_>>();
        let attempted = points.len();
        let Some(fit) = LinearFit::fit(points) else {
            warning::record(
                warnings,
                AnalysisWarning::InsufficientTrendData {
                    player: player.clone(),
                    attempted,
                },
            );
            continue;
        };

        let mut puzzles = matrix.attempted(index).map(|(puzzle, _)| puzzle);
        let first_puzzle = puzzles.next().unwrap_or_default();
        let last_puzzle = puzzles.last().unwrap_or(first_puzzle);
        trends.push(PlayerTrend {
            player: player.clone(),
            slope: fit.slope,
            intercept: fit.intercept,
            first_puzzle,
            predicted: (first_puzzle..=last_puzzle)
                .map(|puzzle| fit.predict(puzzle as f64))
                .collect(),
        });
    }
    trends
}

#[cfg(test)]
mod tests {
    use wordstat_engine::Score::{Failed, NotAttempted, Solved};

    use super::*;

    #[test]
    fn test_prediction_spans_first_to_last_attempt() {
        let matrix = ScoreMatrix::from_columns([(
            "a",
            vec![NotAttempted, Solved(6), NotAttempted, Solved(4), NotAttempted],
        )]);
        let mut warnings = vec![];
        let result = trends(&matrix, &mut warnings);

        assert!(warnings.is_empty());
        let trend = &result[0];
        assert_eq!(trend.first_puzzle, 1);
        assert!((trend.slope + 1.0).abs() < 1e-12);
        assert_eq!(trend.predicted.len(), 3);
        for (actual, expected) in trend.predicted.iter().zip([6.0, 5.0, 4.0]) {
            assert!((actual - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_failures_enter_as_seven() {
        let matrix = ScoreMatrix::from_columns([("a", vec![Solved(5), Failed])]);
        let result = trends(&matrix, &mut vec![]);
        assert!((result[0].slope - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_attempt_is_omitted() {
        let matrix = ScoreMatrix::from_columns([
            ("one", vec![NotAttempted, Solved(3)]),
            ("two", vec![Solved(3), Solved(3)]),
        ]);
        let mut warnings = vec![];
        let result = trends(&matrix, &mut warnings);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].player, "two");
        assert_eq!(
            warnings,
            [AnalysisWarning::InsufficientTrendData {
                player: "one".to_owned(),
                attempted: 1,
            }]
        );
    }
}
