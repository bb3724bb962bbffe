use std::path::PathBuf;

use clap::Args;
use wordstat_analysis::report::Report;

use crate::util::{self, DatasetArg, OptionsArg};

#[derive(Debug, Clone, Args)]
pub(crate) struct ExportArg {
    #[clap(flatten)]
    dataset: DatasetArg,
    #[clap(flatten)]
    options: OptionsArg,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ExportArg) -> anyhow::Result<()> {
    let store = arg.dataset.load_store()?;
    let report = Report::build(&store, &arg.options.to_options());
    util::save_json(&report, arg.output.as_deref())
}
