//! Per-player puzzle grids and the global puzzle count.
//!
//! Loading is a two-phase pipeline:
//!
//! 1. [`PuzzleStore::build`] encodes every sender's entries into a sparse
//!    [`PlayerStack`] and reduces the stacks to the shared puzzle count.
//! 2. Scores are derived per player with that count passed explicitly
//!    ([`PlayerStack::scores`]), so every column has the same length.

use std::collections::BTreeMap;

use wordstat_engine::{PuzzleGrid, Score, ShareHeader};

use crate::{
    dataset::{RawDataset, SenderRecord},
    matrix::ScoreMatrix,
    names::NameMap,
    warning::{self, AnalysisWarning},
};

/// Grids of one player keyed by puzzle number.
///
/// Only puzzles the player actually has data for are stored; any other
/// puzzle number reads as [`PuzzleGrid::EMPTY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStack {
    name: String,
    senders: Vec<String>,
    grids: BTreeMap<usize, PuzzleGrid>,
    extent: usize,
}

impl PlayerStack {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            senders: vec![],
            grids: BTreeMap::new(),
            extent: 0,
        }
    }

    /// Stores a grid; returns `false` and keeps the existing grid if the
    /// puzzle is already present.
    pub fn insert(&mut self, puzzle: usize, grid: PuzzleGrid) -> bool {
        if self.grids.contains_key(&puzzle) {
            return false;
        }
        self.grids.insert(puzzle, grid);
        self.extend_to(puzzle.saturating_add(1));
        true
    }

    /// Grows the number of puzzle slots this player spans.
    pub fn extend_to(&mut self, extent: usize) {
        self.extent = self.extent.max(extent);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw sender identities merged into this player, in load order.
    #[must_use]
    pub fn senders(&self) -> &[String] {
        &self.senders
    }

    /// One past the highest puzzle slot this player covers.
    #[must_use]
    pub fn extent(&self) -> usize {
        self.extent
    }

    #[must_use]
    pub fn grid(&self, puzzle: usize) -> PuzzleGrid {
        self.grids.get(&puzzle).copied().unwrap_or(PuzzleGrid::EMPTY)
    }

    /// Stored grids in puzzle order.
    pub fn grids(&self) -> impl Iterator<Item = (usize, &PuzzleGrid)> {
        self.grids.iter().map(|(puzzle, grid)| (*puzzle, grid))
    }

    /// Grids holding at least one guess, in puzzle order.
    pub fn attempted(&self) -> impl Iterator<Item = (usize, &PuzzleGrid)> {
        self.grids().filter(|(_, grid)| !grid.is_blank())
    }

    /// Dense score vector of length `num_puzzles`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_analysis::store::PlayerStack;
    /// use wordstat_engine::{PuzzleGrid, Score};
    ///
    /// let mut stack = PlayerStack::new("Ann");
    /// stack.insert(1, PuzzleGrid::encode("\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}"));
    /// assert_eq!(
    ///     stack.scores(3),
    ///     [Score::NotAttempted, Score::Solved(1), Score::NotAttempted]
    /// );
    /// ```
    #[must_use]
    pub fn scores(&self, num_puzzles: usize) -> Vec<Score> {
        (0..num_puzzles)
            .map(|puzzle| self.grids.get(&puzzle).map_or(Score::NotAttempted, PuzzleGrid::score))
            .collect()
    }
}

/// Every player's grid stack plus the global puzzle count.
#[derive(Debug, Clone, Default)]
pub struct PuzzleStore {
    players: Vec<PlayerStack>,
    num_puzzles: usize,
    warnings: Vec<AnalysisWarning>,
}

impl PuzzleStore {
    /// Encodes a dataset into per-player stacks.
    ///
    /// Senders resolving to the same display name are merged into one
    /// player, placed at the column of its first sender. A materialized
    /// stack is authoritative for its sender; share texts are then only
    /// checked against their headers.
    #[must_use]
    pub fn build(dataset: &RawDataset, names: &NameMap) -> Self {
        let mut players = Vec::<PlayerStack>::new();
        let mut warnings = vec![];

        for record in dataset.records() {
            let name = names.resolve(&record.sender);
            let index = match players.iter().position(|p| p.name == name) {
                Some(index) => index,
                None => {
                    players.push(PlayerStack::new(name));
                    players.len() - 1
                }
            };

            let grids = encode_record(record, &mut warnings);
            let player = &mut players[index];
            player.senders.push(record.sender.clone());
            player.extend_to(record.extent());
            for (puzzle, grid) in grids {
                if !player.insert(puzzle, grid) {
                    warning::record(
                        &mut warnings,
                        AnalysisWarning::DuplicatePuzzle {
                            player: player.name.clone(),
                            sender: record.sender.clone(),
                            puzzle,
                        },
                    );
                }
            }
            tracing::debug!(
                sender = %record.sender,
                player = %player.name,
                puzzles = player.grids.len(),
                "loaded sender"
            );
        }

        let mut store = Self::from_players(players);
        store.warnings = warnings;
        tracing::info!(
            players = store.players.len(),
            puzzles = store.num_puzzles,
            "built puzzle store"
        );
        store
    }

    /// Wraps already-built stacks, computing the global puzzle count.
    #[must_use]
    pub fn from_players(players: Vec<PlayerStack>) -> Self {
        let num_puzzles = players.iter().map(PlayerStack::extent).max().unwrap_or(0);
        Self {
            players,
            num_puzzles,
            warnings: vec![],
        }
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerStack] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerStack> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Largest player extent; the row count of the score matrix.
    #[must_use]
    pub fn num_puzzles(&self) -> usize {
        self.num_puzzles
    }

    /// Warnings raised while loading.
    #[must_use]
    pub fn warnings(&self) -> &[AnalysisWarning] {
        &self.warnings
    }

    #[must_use]
    pub fn score_matrix(&self) -> ScoreMatrix {
        ScoreMatrix::build(&self.players, self.num_puzzles)
    }
}

fn encode_record(
    record: &SenderRecord,
    warnings: &mut Vec<AnalysisWarning>,
) -> BTreeMap<usize, PuzzleGrid> {
    let mut grids = BTreeMap::new();
    if let Some(stack) = &record.grids {
        for (puzzle, grid) in stack.iter().enumerate() {
            if !grid.is_blank() {
                grids.insert(puzzle, *grid);
            }
        }
    }

    for (&puzzle, text) in &record.texts {
        let grid = if record.grids.is_some() {
            grids.get(&puzzle).copied().unwrap_or(PuzzleGrid::EMPTY)
        } else {
            let grid = PuzzleGrid::encode(text);
            grids.insert(puzzle, grid);
            grid
        };
        check_header(&record.sender, puzzle, text, &grid, warnings);
    }
    grids
}

fn check_header(
    sender: &str,
    puzzle: usize,
    text: &str,
    grid: &PuzzleGrid,
    warnings: &mut Vec<AnalysisWarning>,
) {
    let Some(header) = ShareHeader::find(text) else {
        return;
    };
    if header.puzzle != puzzle {
        warning::record(
            warnings,
            AnalysisWarning::PuzzleNumberMismatch {
                sender: sender.to_owned(),
                puzzle,
                header: header.puzzle,
            },
        );
    }
    let derived = grid.score();
    if header.claimed != derived {
        warning::record(
            warnings,
            AnalysisWarning::ClaimedScoreMismatch {
                sender: sender.to_owned(),
                puzzle,
                claimed: header.claimed,
                derived,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use wordstat_engine::Symbol;

    use super::*;

    const SOLVED_2: &str = "Wordle 0 2/6\n\n\u{2B1C}\u{1F7E8}\u{2B1C}\u{2B1C}\u{2B1C}\n\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}";

    #[test]
    fn test_global_count_spans_all_players() {
        let mut dataset = RawDataset::new();
        dataset.insert_text("a", 0, SOLVED_2);
        dataset.insert_text("b", 9, "\u{2B1C}");
        let store = PuzzleStore::build(&dataset, &NameMap::new());
        assert_eq!(store.num_puzzles(), 10);
        assert_eq!(store.players()[0].extent(), 1);
        assert_eq!(store.players()[0].scores(store.num_puzzles()).len(), 10);
    }

    #[test]
    fn test_materialized_stack_is_authoritative() {
        let mut dataset = RawDataset::new();
        let mut solved = [[0; 5]; 6];
        solved[0] = [3; 5];
        let grid = PuzzleGrid::from_codes(&solved).unwrap();
        dataset.insert_grids("a", vec![PuzzleGrid::EMPTY, grid, PuzzleGrid::EMPTY, PuzzleGrid::EMPTY]);
        // the text says solved on row 2, the stack says row 1
        dataset.insert_text("a", 1, SOLVED_2.replace("Wordle 0", "Wordle 1"));

        let store = PuzzleStore::build(&dataset, &NameMap::new());
        let player = &store.players()[0];
        assert_eq!(player.extent(), 4);
        assert_eq!(player.grid(1).score(), Score::Solved(1));
        assert_eq!(player.grids().count(), 1);
        assert_eq!(
            store.warnings(),
            [AnalysisWarning::ClaimedScoreMismatch {
                sender: "a".to_owned(),
                puzzle: 1,
                claimed: Score::Solved(2),
                derived: Score::Solved(1),
            }]
        );
    }

    #[test]
    fn test_header_number_mismatch_warns() {
        let mut dataset = RawDataset::new();
        dataset.insert_text("a", 5, SOLVED_2);
        let store = PuzzleStore::build(&dataset, &NameMap::new());
        assert_eq!(
            store.warnings(),
            [AnalysisWarning::PuzzleNumberMismatch {
                sender: "a".to_owned(),
                puzzle: 5,
                header: 0,
            }]
        );
        assert_eq!(store.players()[0].grid(5).score(), Score::Solved(2));
    }

    #[test]
    fn test_merge_by_display_name() {
        let mut dataset = RawDataset::new();
        dataset.insert_text("ann@home", 0, SOLVED_2);
        dataset.insert_text("bob", 0, "\u{2B1C}");
        dataset.insert_text("ann@work", 0, "\u{1F7E8}");
        dataset.insert_text("ann@work", 2, "\u{1F7E8}");
        let names = NameMap::from_iter([("ann@home", "Ann"), ("ann@work", "Ann")]);

        let store = PuzzleStore::build(&dataset, &names);
        let names = store.players().iter().map(PlayerStack::name).collect::<Vec<_>>();
        assert_eq!(names, ["Ann", "bob"]);

        let ann = store.player("Ann").unwrap();
        assert_eq!(ann.senders(), ["ann@home", "ann@work"]);
        assert_eq!(ann.grid(0).score(), Score::Solved(2));
        assert_eq!(ann.grid(2).cell(0, 0), Symbol::Present);
        assert_eq!(
            store.warnings(),
            [AnalysisWarning::DuplicatePuzzle {
                player: "Ann".to_owned(),
                sender: "ann@work".to_owned(),
                puzzle: 0,
            }]
        );
    }

    #[test]
    fn test_extent_saturates_at_last_puzzle_slot() {
        let mut stack = PlayerStack::new("a");
        assert!(stack.insert(usize::MAX, PuzzleGrid::encode(SOLVED_2)));
        assert_eq!(stack.extent(), usize::MAX);
        assert!(!stack.insert(usize::MAX, PuzzleGrid::EMPTY));
    }

    #[test]
    fn test_empty_dataset() {
        let store = PuzzleStore::build(&RawDataset::new(), &NameMap::new());
        assert_eq!(store.num_puzzles(), 0);
        assert!(store.players().is_empty());
        assert_eq!(store.score_matrix().num_puzzles(), 0);
    }
}
