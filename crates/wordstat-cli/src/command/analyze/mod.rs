//! Text report of the statistics suite
//!
//! Prints one section per statistic: player summary, score distribution,
//! weekday means, pairwise correlation, trend, positional averages and the
//! most frequent feedback rows.

mod table;

use clap::Args;
use wordstat_analysis::report::Report;

use crate::util::{DatasetArg, OptionsArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    options: OptionsArg,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let store = arg.dataset.load_store()?;
    let report = Report::build(&store, &arg.options.to_options());

    println!(
        "Puzzle Report ({} players, {} puzzles)",
        report.scores.num_players(),
        report.scores.num_puzzles()
    );
    println!("==========================================\n");

    table::print_summary(&report.summary);
    println!();

    table::print_distribution(&report.summary);
    println!();

    table::print_weekly(&report.weekly);
    println!();

    table::print_correlation(&report.correlation);
    println!();

    table::print_trends(&report.trends);
    println!();

    table::print_positional(&report.positional);
    println!();

    table::print_patterns(&report.patterns);

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings: {}", report.warnings.len());
        for warning in &report.warnings {
            println!("  {warning}");
        }
    }
    Ok(())
}
