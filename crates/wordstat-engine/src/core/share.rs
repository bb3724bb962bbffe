use serde::{Deserialize, Serialize};

use super::{grid::GRID_ROWS, score::Score};

/// Header line of a shared result, e.g. `Wordle 1,234 4/6*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareHeader {
    /// Puzzle number announced by the game.
    pub puzzle: usize,
    /// Result the game printed (`X` becomes [`Score::Failed`]).
    pub claimed: Score,
    /// A trailing `*` marks hard mode.
    pub hard_mode: bool,
}

impl ShareHeader {
    const PREFIX: &'static str = "Wordle";

    /// Finds the first header line in a decoded share text.
    ///
    /// Thousands separators (`,` or `.`) in the puzzle number are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_engine::{Score, ShareHeader};
    ///
    /// let header = ShareHeader::find("Wordle 1,234 X/6*\n\n...").unwrap();
    /// assert_eq!(header.puzzle, 1234);
    /// assert_eq!(header.claimed, Score::Failed);
    /// assert!(header.hard_mode);
    /// ```
    #[must_use]
    pub fn find(text: &str) -> Option<Self> {
        text.lines().find_map(Self::parse_line)
    }

    fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = line.trim().strip_prefix(Self::PREFIX)?.split_whitespace();
        let puzzle = parse_puzzle_number(tokens.next()?)?;

        let result = tokens.next()?;
        let (result, hard_mode) = match result.strip_suffix('*') {
            Some(result) => (result, true),
            None => (result, false),
        };
        let (claimed, limit) = result.split_once('/')?;
        if limit.parse::<usize>().ok()? != GRID_ROWS {
            return None;
        }
        let claimed = match claimed {
            "X" | "x" => Score::Failed,
            row => {
                let row = row.parse::<u8>().ok()?;
                if row == 0 || usize::from(row) > GRID_ROWS {
                    return None;
                }
                Score::Solved(row)
            }
        };

        Some(Self {
            puzzle,
            claimed,
            hard_mode,
        })
    }
}

fn parse_puzzle_number(token: &str) -> Option<usize> {
    let digits = token
        .chars()
        .filter(|ch| !matches!(ch, ',' | '.'))
        .collect::<String>();
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
