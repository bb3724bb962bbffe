//! Fixed-width tables for the analyze command

use wordstat_analysis::{
    correlation::CorrelationMatrix, patterns::RowPatterns, positional::PositionalAverages,
    summary::PlayerSummary, trend::PlayerTrend, weekly::PlayerWeekly,
};
use wordstat_engine::Score;

use crate::util::fmt_opt;

const LABEL_WIDTH: usize = 20;

fn label(name: &str) -> String {
    if name.chars().count() <= LABEL_WIDTH {
        name.to_string()
    } else {
        let mut short = name.chars().take(LABEL_WIDTH - 1).collect::<String>();
        short.push('~');
        short
    }
}

fn print_separator(width: usize) {
    println!("  {}", "-".repeat(width));
}

pub(super) fn print_summary(summary: &[PlayerSummary]) {
    println!("Players:");
    println!(
        "  {:<20} {:>7} {:>7} {:>6} {:>7} {:>5} {:>6} {:>6} {:>6} {:>7} {:>8}",
        "Player",
        "Played",
        "Missed",
        "Gap",
        "Streak",
        "Best",
        "Mean",
        "Median",
        "Std",
        "Solved",
        "MeanGap",
    );
    // label(20) + 10 numeric columns + spaces(10)
    print_separator(93);
    for row in summary {
        println!(
            "  {:<20} {:>7} {:>7} {:>6} {:>7} {:>5} {:>6} {:>6} {:>6} {:>7} {:>8}",
            label(&row.player),
            row.attempted,
            row.missed,
            row.longest_gap,
            row.longest_streak,
            row.best.unwrap_or(Score::NotAttempted),
            fmt_opt(row.mean, 2),
            fmt_opt(row.median, 1),
            fmt_opt(row.std_dev, 2),
            fmt_opt(row.mean_solved, 2),
            fmt_opt(row.mean_gap, 2),
        );
    }
    println!("  (Mean/Std count failures as 7; Solved averages solved puzzles only)");
}

pub(super) fn print_distribution(summary: &[PlayerSummary]) {
    println!("Score distribution:");
    println!(
        "  {:<20} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5} {:>5}",
        "Player", "1", "2", "3", "4", "5", "6", "X",
    );
    print_separator(62);
    for row in summary {
        let counts = row
            .distribution
            .solved
            .iter()
            .map(|count| format!("{count:>5}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "  {:<20} {counts} {:>5}",
            label(&row.player),
            row.distribution.failed
        );
    }
}

pub(super) fn print_weekly(weekly: &[PlayerWeekly]) {
    println!("Mean solve row by weekday (attempted):");
    let Some(first) = weekly.first() else {
        println!("  (no players)");
        return;
    };
    let header = first
        .days
        .iter()
        .map(|day| format!("{:>11}", day.weekday.to_string()))
        .collect::<String>();
    println!("  {:<20}{header}", "Player");
    print_separator(LABEL_WIDTH + 11 * first.days.len());
    for row in weekly {
        let cells = row
            .days
            .iter()
            .map(|day| format!("{:>11}", format!("{} ({})", fmt_opt(day.mean, 2), day.attempted)))
            .collect::<String>();
        println!("  {:<20}{cells}", label(&row.player));
    }
}

pub(super) fn print_correlation(correlation: &CorrelationMatrix) {
    println!("Correlation r² (p-value):");
    let columns = correlation
        .players
        .iter()
        .map(|name| format!("{:>16}", label(name).chars().take(15).collect::<String>()))
        .collect::<String>();
    println!("  {:<20}{columns}", "");
    print_separator(LABEL_WIDTH + 16 * correlation.players.len());
    for (i, name) in correlation.players.iter().enumerate() {
        let cells = (0..correlation.players.len())
            .map(|j| {
                let cell = match (correlation.r_squared[i][j], correlation.p_value[i][j]) {
                    (Some(r2), Some(p)) => format!("{r2:.2} ({p:.3})"),
                    _ => "-".to_string(),
                };
                format!("{cell:>16}")
            })
            .collect::<String>();
        println!("  {:<20}{cells}", label(name));
    }
}

pub(super) fn print_trends(trends: &[PlayerTrend]) {
    println!("Linear trend:");
    println!(
        "  {:<20} {:>12} {:>10} {:>10} {:>10}",
        "Player", "Slope/100", "Intercept", "Start", "End",
    );
    print_separator(66);
    for trend in trends {
        println!(
            "  {:<20} {:>12.3} {:>10.2} {:>10} {:>10}",
            label(&trend.player),
            trend.slope * 100.0,
            trend.intercept,
            fmt_opt(trend.predicted.first().copied(), 2),
            fmt_opt(trend.predicted.last().copied(), 2),
        );
    }
}

pub(super) fn print_positional(positional: &PositionalAverages) {
    println!("Mean symbol code by cell (all players, 1=absent 2=present 3=correct):");
    for (row, cells) in positional.overall.iter().enumerate() {
        let cells = cells
            .iter()
            .map(|mean| format!("{mean:>6.2}"))
            .collect::<String>();
        println!("  guess {}{cells}", row + 1);
    }
}

pub(super) fn print_patterns(patterns: &[RowPatterns]) {
    println!("Most frequent feedback by guess:");
    for row in patterns {
        let top = row
            .top
            .iter()
            .map(|freq| format!("{} {:>5.1}%", freq.glyphs(), freq.fraction * 100.0))
            .collect::<Vec<_>>()
            .join("  ");
        println!(
            "  guess {} (n={:>5}, {:>3} distinct): {top}",
            row.row, row.total, row.distinct
        );
    }
}
