//! Synthetic dataset generation
//!
//! Each simulated player has a fixed skill (chance that an unsolved letter
//! position turns correct on a guess) and a participation rate. Positions
//! stay correct once found, so every simulated grid is a plausible game.

use std::{array, path::PathBuf};

use clap::Args;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use wordstat_analysis::dataset::RawDataset;
use wordstat_engine::{GRID_ROWS, GridRow, PuzzleGrid, Score, Symbol};

use crate::util;

const PRESENT_PROBABILITY: f64 = 0.3;
const HARD_MODE_PROBABILITY: f64 = 0.1;

#[derive(Debug, Clone, Args)]
pub(crate) struct GenerateArg {
    /// Number of players
    #[arg(long, default_value_t = 4)]
    players: usize,
    /// Number of consecutive puzzles to simulate
    #[arg(long, default_value_t = 120)]
    puzzles: usize,
    /// Number of the first simulated puzzle
    #[arg(long, default_value_t = 0)]
    first_puzzle: usize,
    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Also store every sender's grids as a materialized stack
    #[arg(long)]
    materialize: bool,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy)]
struct PlayerProfile {
    skill: f64,
    participation: f64,
}

impl PlayerProfile {
    fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            skill: rng.random_range(0.15..0.45),
            participation: rng.random_range(0.5..0.95),
        }
    }

    fn play<R>(&self, rng: &mut R) -> Vec<GridRow>
    where
        R: Rng + ?Sized,
    {
        let mut known = [false; 5];
        let mut rows = Vec::with_capacity(GRID_ROWS);
        while rows.len() < GRID_ROWS {
            let row = array::from_fn(|col| {
                if known[col] || rng.random_bool(self.skill) {
                    known[col] = true;
                    Symbol::Correct
                } else if rng.random_bool(PRESENT_PROBABILITY) {
                    Symbol::Present
                } else {
                    Symbol::Absent
                }
            });
            rows.push(row);
            if known.iter().all(|&k| k) {
                break;
            }
        }
        rows
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(seed, players = arg.players, puzzles = arg.puzzles, "generating dataset");
    let mut rng = Pcg32::seed_from_u64(seed);

    let mut dataset = RawDataset::new();
    for index in 0..arg.players {
        let sender = format!("player{}@example.com", index + 1);
        let profile = PlayerProfile::random(&mut rng);
        let mut grids = vec![PuzzleGrid::EMPTY; arg.first_puzzle + arg.puzzles];

        for puzzle in arg.first_puzzle..arg.first_puzzle + arg.puzzles {
            if !rng.random_bool(profile.participation) {
                continue;
            }
            let rows = profile.play(&mut rng);
            let hard_mode = rng.random_bool(HARD_MODE_PROBABILITY);
            let grid = PuzzleGrid::from_symbols(rows.iter().flatten().copied());
            dataset.insert_text(&sender, puzzle, share_text(puzzle, &grid, hard_mode));
            grids[puzzle] = grid;
        }
        tracing::debug!(
            sender = %sender,
            skill = profile.skill,
            participation = profile.participation,
            "simulated player"
        );
        if arg.materialize {
            dataset.insert_grids(&sender, grids);
        }
    }

    util::save_json(&dataset, arg.output.as_deref())
}

fn share_text(puzzle: usize, grid: &PuzzleGrid, hard_mode: bool) -> String {
    let result = match grid.score() {
        Score::Solved(row) => row.to_string(),
        Score::Failed | Score::NotAttempted => "X".to_string(),
    };
    let star = if hard_mode { "*" } else { "" };
    let rows = grid
        .rows()
        .iter()
        .filter(|row| row.iter().any(|symbol| !symbol.is_empty()))
        .map(|row| row.iter().map(|symbol| symbol.glyph()).collect::<String>())
        .collect::<Vec<_>>();
    format!(
        "Wordle {} {result}/{GRID_ROWS}{star}\n\n{}",
        thousands(puzzle),
        rows.join("\n")
    )
}

/// Formats a puzzle number with `,` thousands separators, as the game does.
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use wordstat_engine::ShareHeader;

    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(7), "7");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_share_text_round_trips_through_header_and_encoder() {
        let mut rng = Pcg32::seed_from_u64(7);
        let profile = PlayerProfile {
            skill: 0.3,
            participation: 1.0,
        };
        for puzzle in [5, 1234] {
            let rows = profile.play(&mut rng);
            let grid = PuzzleGrid::from_symbols(rows.iter().flatten().copied());
            let text = share_text(puzzle, &grid, false);

            assert_eq!(PuzzleGrid::encode(&text), grid);
            let header = ShareHeader::find(&text).unwrap();
            assert_eq!(header.puzzle, puzzle);
            assert_eq!(header.claimed, grid.score());
            assert_ne!(grid.score(), Score::NotAttempted);
        }
    }

    #[test]
    fn test_found_positions_stay_correct() {
        let mut rng = Pcg32::seed_from_u64(11);
        let profile = PlayerProfile {
            skill: 0.5,
            participation: 1.0,
        };
        for _ in 0..50 {
            let rows = profile.play(&mut rng);
            for pair in rows.windows(2) {
                for col in 0..5 {
                    if pair[0][col] == Symbol::Correct {
                        assert_eq!(pair[1][col], Symbol::Correct);
                    }
                }
            }
        }
    }
}
