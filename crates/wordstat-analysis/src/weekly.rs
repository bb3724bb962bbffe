//! Day-of-week aggregation of solve scores.
//!
//! Puzzle numbers map to calendar days from a fixed anchor: puzzle 0 was
//! published on [`ANCHOR_DATE`], a [`ANCHOR_WEEKDAY`], and each later puzzle
//! is one day after its predecessor.

use chrono::{Days, NaiveDate, Weekday};
use serde::Serialize;
use wordstat_stats::descriptive::DescriptiveStats;

use crate::matrix::ScoreMatrix;

/// Publication date of puzzle 0.
pub const ANCHOR_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 6, 19) {
    Some(date) => date,
    None => panic!("invalid anchor date"),
};

/// Weekday of puzzle 0.
pub const ANCHOR_WEEKDAY: Weekday = Weekday::Sat;

/// Weekdays in calendar order, the row order of [`PlayerWeekly::days`].
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Day of the week puzzle `puzzle` was published on.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use wordstat_analysis::weekly::puzzle_weekday;
///
/// assert_eq!(puzzle_weekday(0), Weekday::Sat);
/// assert_eq!(puzzle_weekday(1), Weekday::Sun);
/// assert_eq!(puzzle_weekday(7), Weekday::Sat);
/// ```
#[must_use]
pub fn puzzle_weekday(puzzle: usize) -> Weekday {
    (0..puzzle % 7).fold(ANCHOR_WEEKDAY, |day, _| day.succ())
}

/// Publication date of puzzle `puzzle`, or `None` past the calendar range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wordstat_analysis::weekly::puzzle_date;
///
/// assert_eq!(puzzle_date(0), NaiveDate::from_ymd_opt(2021, 6, 19));
/// assert_eq!(puzzle_date(1000), NaiveDate::from_ymd_opt(2024, 3, 15));
/// ```
#[must_use]
pub fn puzzle_date(puzzle: usize) -> Option<NaiveDate> {
    let days = u64::try_from(puzzle).ok()?;
    ANCHOR_DATE.checked_add_days(Days::new(days))
}

/// Statistics of one player on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayStats {
    pub weekday: Weekday,
    /// Attempted puzzles, failures included.
    pub attempted: usize,
    /// Solved puzzles contributing to `mean`.
    pub solved: usize,
    /// Mean solve row over solved puzzles only.
    pub mean: Option<f64>,
    /// Standard error of `mean` (sample standard deviation), `None` below two solves.
    pub sem: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerWeekly {
    pub player: String,
    /// Monday through Sunday.
    pub days: [WeekdayStats; 7],
}

impl PlayerWeekly {
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &WeekdayStats {
        &self.days[weekday.num_days_from_monday() as usize]
    }
}

/// Per-player, per-weekday attempt counts and solve-row means.
///
/// Failed puzzles count as attempted but do not enter the mean; puzzles that
/// were not attempted are ignored entirely.
#[must_use]
pub fn weekly(matrix: &ScoreMatrix) -> Vec<PlayerWeekly> {
    matrix
        .columns()
        .map(|(player, scores)| {
            let mut attempted = [0; 7];
            let mut solved = [const { Vec::new() }; 7];
            for (puzzle, score) in scores.iter().enumerate() {
                if !score.is_attempted() {
                    continue;
                }
                let day = puzzle_weekday(puzzle).num_days_from_monday() as usize;
                attempted[day] += 1;
                if let Some(row) = score.solved_value() {
                    solved[day].push(row);
                }
            }

            let days = std::array::from_fn(|day| {
                let stats = DescriptiveStats::new(solved[day].iter().copied());
                WeekdayStats {
                    weekday: WEEKDAYS[day],
                    attempted: attempted[day],
                    solved: solved[day].len(),
                    mean: stats.as_ref().map(|s| s.mean),
                    sem: stats.as_ref().and_then(DescriptiveStats::std_error),
                }
            });
            PlayerWeekly {
                player: player.to_owned(),
                days,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use wordstat_engine::Score;

    use super::*;

    #[test]
    fn test_weekday_cycle() {
        for puzzle in 0..30 {
            assert_eq!(puzzle_weekday(puzzle), puzzle_weekday(puzzle + 7));
        }
        assert_eq!(puzzle_weekday(2), Weekday::Mon);
        assert_eq!(puzzle_weekday(6), Weekday::Fri);
    }

    #[test]
    fn test_dates_match_weekdays() {
        for puzzle in [0, 1, 5, 100, 1234] {
            let date = puzzle_date(puzzle).unwrap();
            assert_eq!(chrono::Datelike::weekday(&date), puzzle_weekday(puzzle));
        }
    }

    #[test]
    fn test_failures_count_but_do_not_average() {
        // puzzles 0, 7, 14 are Saturdays
        let mut scores = vec![Score::NotAttempted; 15];
        scores[0] = Score::Solved(3);
        scores[7] = Score::Failed;
        scores[14] = Score::Solved(5);
        scores[2] = Score::Solved(4);
        let matrix = ScoreMatrix::from_columns([("a", scores)]);

        let result = weekly(&matrix);
        let sat = result[0].day(Weekday::Sat);
        assert_eq!(sat.attempted, 3);
        assert_eq!(sat.solved, 2);
        assert_eq!(sat.mean, Some(4.0));
        // sample std of [3, 5] is sqrt(2), divided by sqrt(2)
        assert!((sat.sem.unwrap() - 1.0).abs() < 1e-12);

        let mon = result[0].day(Weekday::Mon);
        assert_eq!((mon.attempted, mon.mean, mon.sem), (1, Some(4.0), None));

        let sun = result[0].day(Weekday::Sun);
        assert_eq!((sun.attempted, sun.mean), (0, None));
    }
}
