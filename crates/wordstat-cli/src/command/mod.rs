use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, export::ExportArg, generate::GenerateArg, show::ShowArg};

mod analyze;
mod export;
mod generate;
mod show;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print score, weekday, correlation and pattern tables
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Write every statistic as one JSON report
    Export(#[clap(flatten)] ExportArg),
    /// Render one player's grid for one puzzle
    Show(#[clap(flatten)] ShowArg),
    /// Generate a synthetic dataset
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Export(arg) => export::run(&arg)?,
        Mode::Show(arg) => show::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
