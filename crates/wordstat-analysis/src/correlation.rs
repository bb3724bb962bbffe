use serde::Serialize;
use wordstat_stats::correlation::Correlation;

use crate::matrix::ScoreMatrix;

/// Pairwise coefficient of determination and p-value between players.
///
/// Both matrices are indexed `[row player][column player]` in player order.
/// An entry is `None` when the pair shares fewer than two attempted puzzles
/// or one of the overlapping series is constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub players: Vec<String>,
    pub r_squared: Vec<Vec<Option<f64>>>,
    pub p_value: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Correlates every pair of players over the puzzles both attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_analysis::{correlation::CorrelationMatrix, matrix::ScoreMatrix};
    /// use wordstat_engine::Score::*;
    ///
    /// let matrix = ScoreMatrix::from_columns([
    ///     ("a", vec![Solved(2), Solved(3), Solved(4), NotAttempted]),
    ///     ("b", vec![Solved(3), Solved(4), Solved(5), Solved(1)]),
    /// ]);
    /// let corr = CorrelationMatrix::build(&matrix);
    /// assert!((corr.r_squared[0][1].unwrap() - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn build(matrix: &ScoreMatrix) -> Self {
        let n = matrix.num_players();
        let mut r_squared = vec![vec![None; n]; n];
        let mut p_value = vec![vec![None; n]; n];

        for i in 0..n {
            for j in i..n {
                let pairs = matrix
                    .column(i)
                    .iter()
                    .zip(matrix.column(j))
                    .filter_map(|(x, y)| Some((x.value()?, y.value()?)));
                let Some(corr) = Correlation::pearson(pairs) else {
                    continue;
                };
                let r2 = Some(corr.r_squared());
                let p = Some(corr.p_value);
                r_squared[i][j] = r2;
                r_squared[j][i] = r2;
                p_value[i][j] = p;
                p_value[j][i] = p;
            }
        }

        Self {
            players: matrix.players().to_vec(),
            r_squared,
            p_value,
        }
    }
}
