use serde::Serialize;
use wordstat_engine::{GRID_COLS, GRID_ROWS};

use crate::store::PlayerStack;

/// Mean symbol code at each grid position.
pub type CellGrid = [[f64; GRID_COLS]; GRID_ROWS];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPositional {
    pub player: String,
    /// Mean code per cell over attempted puzzles, empty cells excluded;
    /// `0.0` where the player never reached the cell.
    pub cells: CellGrid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionalAverages {
    pub players: Vec<PlayerPositional>,
    /// Mean of the per-player means, over players with data at the cell.
    pub overall: CellGrid,
}

#[derive(Default, Clone, Copy)]
struct Accumulator {
    sum: u32,
    count: u32,
}

impl Accumulator {
    fn mean(self) -> Option<f64> {
        (self.count > 0).then(|| f64::from(self.sum) / f64::from(self.count))
    }
}

/// Per-cell average of symbol codes for every player and across players.
///
/// # Examples
///
/// ```
/// use wordstat_analysis::{positional::positional_averages, store::PlayerStack};
/// use wordstat_engine::PuzzleGrid;
///
/// let mut ann = PlayerStack::new("Ann");
/// ann.insert(0, PuzzleGrid::encode("\u{2B1C}\u{1F7E9}"));
/// ann.insert(1, PuzzleGrid::encode("\u{1F7E9}"));
/// let averages = positional_averages(&[ann]);
/// assert_eq!(averages.players[0].cells[0][0], 2.0);
/// assert_eq!(averages.players[0].cells[0][1], 3.0);
/// assert_eq!(averages.players[0].cells[5][4], 0.0);
/// ```
#[must_use]
pub fn positional_averages(players: &[PlayerStack]) -> PositionalAverages {
    let per_player = players
        .iter()
        .map(|player| {
            let mut cells = [[Accumulator::default(); GRID_COLS]; GRID_ROWS];
            for (_, grid) in player.attempted() {
                for (acc_row, codes) in cells.iter_mut().zip(grid.codes()) {
                    for (acc, code) in acc_row.iter_mut().zip(codes) {
                        if code != 0 {
                            acc.sum += u32::from(code);
                            acc.count += 1;
                        }
                    }
                }
            }
            (player.name(), cells.map(|row| row.map(Accumulator::mean)))
        })
        .collect::<Vec<_>>();

    let overall = std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            wordstat_stats::descriptive::mean(
                per_player.iter().filter_map(|(_, means)| means[row][col]),
            )
            .unwrap_or(0.0)
        })
    });

    PositionalAverages {
        players: per_player
            .into_iter()
            .map(|(player, means)| PlayerPositional {
                player: player.to_owned(),
                cells: means.map(|row| row.map(|mean| mean.unwrap_or(0.0))),
            })
            .collect(),
        overall,
    }
}
