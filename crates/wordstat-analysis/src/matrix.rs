use serde::Serialize;
use wordstat_engine::Score;

use crate::store::PlayerStack;

/// Puzzle-by-player table of solve scores.
///
/// Rows are puzzle numbers `0..num_puzzles`, columns are players in order of
/// first appearance. Every column has exactly `num_puzzles` entries; puzzles
/// a player has no grid for are [`Score::NotAttempted`].
///
/// # Examples
///
/// ```
/// use wordstat_analysis::{matrix::ScoreMatrix, store::PlayerStack};
/// use wordstat_engine::{PuzzleGrid, Score};
///
/// let mut ann = PlayerStack::new("Ann");
/// ann.insert(0, PuzzleGrid::encode("\u{2B1C}"));
/// let matrix = ScoreMatrix::build(&[ann], 2);
/// assert_eq!(matrix.get(0, 0), Score::Failed);
/// assert_eq!(matrix.get(1, 0), Score::NotAttempted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreMatrix {
    num_puzzles: usize,
    players: Vec<String>,
    columns: Vec<Vec<Score>>,
}

impl ScoreMatrix {
    /// Column-stacks the players' score vectors, each padded to `num_puzzles`.
    #[must_use]
    pub fn build(players: &[PlayerStack], num_puzzles: usize) -> Self {
        Self {
            num_puzzles,
            players: players.iter().map(|p| p.name().to_owned()).collect(),
            columns: players.iter().map(|p| p.scores(num_puzzles)).collect(),
        }
    }

    /// Builds a matrix directly from named score columns.
    ///
    /// Shorter columns are padded with [`Score::NotAttempted`] up to the
    /// longest one.
    #[must_use]
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Score>)>,
        S: Into<String>,
    {
        let (players, mut columns): (Vec<String>, Vec<Vec<Score>>) = columns
            .into_iter()
            .map(|(name, scores)| (name.into(), scores))
            .unzip();
        let num_puzzles = columns.iter().map(Vec::len).max().unwrap_or(0);
        for column in &mut columns {
            column.resize(num_puzzles, Score::NotAttempted);
        }
        Self {
            num_puzzles,
            players,
            columns,
        }
    }

    #[must_use]
    pub fn num_puzzles(&self) -> usize {
        self.num_puzzles
    }

    #[must_use]
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    #[must_use]
    pub fn column(&self, player: usize) -> &[Score] {
        &self.columns[player]
    }

    /// Named columns in player order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Score])> {
        self.players
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }

    #[must_use]
    pub fn get(&self, puzzle: usize, player: usize) -> Score {
        self.columns[player][puzzle]
    }

    /// Scores of every player for one puzzle.
    pub fn row(&self, puzzle: usize) -> impl Iterator<Item = Score> + '_ {
        self.columns.iter().map(move |column| column[puzzle])
    }

    /// Puzzle numbers and numeric values of a player's attempted puzzles.
    pub fn attempted(&self, player: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.columns[player]
            .iter()
            .enumerate()
            .filter_map(|(puzzle, score)| score.value().map(|value| (puzzle, value)))
    }
}
