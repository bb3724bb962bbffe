use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use serde::{Serialize, de::DeserializeOwned};
use wordstat_analysis::{
    dataset::RawDataset, names::NameMap, report::AnalysisOptions, store::PuzzleStore,
};

/// Pretty-printed JSON destination: a file, or stdout when no path is given.
pub(crate) struct JsonOutput {
    writer: Box<dyn Write>,
    target: String,
}

impl JsonOutput {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                writer: Box::new(io::stdout().lock()),
                target: "stdout".to_owned(),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            target: path.display().to_string(),
        })
    }

    pub fn write<T>(mut self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .with_context(|| format!("Failed to write JSON to {}", self.target))?;
        writeln!(self.writer)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to flush JSON to {}", self.target))?;
        tracing::info!("wrote {}", self.target);
        Ok(())
    }
}

pub(crate) fn save_json<T>(value: &T, path: Option<&Path>) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
{
    JsonOutput::create(path)?.write(value)
}

pub(crate) fn read_json_file<T>(file_kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Dataset location and name mapping shared by every reading subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct DatasetArg {
    /// Path to the dataset JSON file (sender -> puzzle -> share text)
    pub dataset: PathBuf,

    /// JSON file mapping raw sender identities to display names
    #[arg(long)]
    pub names: Option<PathBuf>,
}

impl DatasetArg {
    /// Loads the dataset and builds the per-player puzzle store.
    pub fn load_store(&self) -> anyhow::Result<PuzzleStore> {
        let dataset = read_json_file::<RawDataset>("dataset", &self.dataset)?;
        let names = match &self.names {
            Some(path) => read_json_file::<NameMap>("names", path)?,
            None => NameMap::new(),
        };
        tracing::info!(
            senders = dataset.records().len(),
            "loaded {}",
            self.dataset.display()
        );
        Ok(PuzzleStore::build(&dataset, &names))
    }
}

/// Tunables of the statistics suite.
#[derive(Debug, Clone, Args)]
pub(crate) struct OptionsArg {
    /// Attempted puzzles per rolling-average window
    #[arg(long, default_value_t = AnalysisOptions::DEFAULT_ROLLING_WINDOW)]
    pub window: NonZeroUsize,
}

impl OptionsArg {
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            rolling_window: self.window,
        }
    }
}

/// Formats an optional number, `-` when undefined.
pub(crate) fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_fmt_opt() {
        assert_eq!(fmt_opt(None, 2), "-");
        assert_eq!(fmt_opt(Some(1.23456), 2), "1.23");
        assert_eq!(fmt_opt(Some(7.0), 0), "7");
    }

    #[test]
    fn test_saved_dataset_reads_back() {
        let path = env::temp_dir().join(format!("wordstat-util-{}.json", process::id()));
        let mut dataset = RawDataset::new();
        dataset.insert_text("a", 3, "Wordle 3 X/6");
        save_json(&dataset, Some(&path)).unwrap();
        let loaded = read_json_file::<RawDataset>("dataset", &path);
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), dataset);
    }

    #[test]
    fn test_missing_file_names_its_kind() {
        let path = env::temp_dir().join("wordstat-util-missing/names.json");
        let err = read_json_file::<NameMap>("names", &path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open names file"), "{err}");
    }
}
