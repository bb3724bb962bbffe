use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{
    correlation::CorrelationMatrix,
    matrix::ScoreMatrix,
    patterns::{self, RowPatterns},
    positional::{self, PositionalAverages},
    rolling::{self, PlayerRolling},
    store::PuzzleStore,
    summary::{self, PlayerSummary},
    trend::{self, PlayerTrend},
    warning::AnalysisWarning,
    weekly::{self, PlayerWeekly},
};

/// Tunables of the statistics suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Attempted puzzles per rolling-average window.
    pub rolling_window: NonZeroUsize,
}

impl AnalysisOptions {
    pub const DEFAULT_ROLLING_WINDOW: NonZeroUsize = NonZeroUsize::new(7).unwrap();
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            rolling_window: Self::DEFAULT_ROLLING_WINDOW,
        }
    }
}

/// Every statistic computed from one puzzle store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub options: AnalysisOptions,
    pub scores: ScoreMatrix,
    pub summary: Vec<PlayerSummary>,
    pub weekly: Vec<PlayerWeekly>,
    pub rolling: Vec<PlayerRolling>,
    pub correlation: CorrelationMatrix,
    pub trends: Vec<PlayerTrend>,
    pub positional: PositionalAverages,
    pub patterns: Vec<RowPatterns>,
    /// Load warnings followed by the warnings of each statistic.
    pub warnings: Vec<AnalysisWarning>,
}

impl Report {
    /// Runs the full statistics suite.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordstat_analysis::{
    ///     dataset::RawDataset,
    ///     names::NameMap,
    ///     report::{AnalysisOptions, Report},
    ///     store::PuzzleStore,
    /// };
    ///
    /// let mut dataset = RawDataset::new();
    /// dataset.insert_text("ann", 0, "Wordle 0 1/6\n\n\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}");
    /// let store = PuzzleStore::build(&dataset, &NameMap::new());
    /// let report = Report::build(&store, &AnalysisOptions::default());
    /// assert_eq!(report.summary[0].attempted, 1);
    /// // one attempt is too few for a rolling window or a trend
    /// assert_eq!(report.warnings.len(), 2);
    /// ```
    #[must_use]
    pub fn build(store: &PuzzleStore, options: &AnalysisOptions) -> Self {
        let scores = store.score_matrix();
        let mut warnings = store.warnings().to_vec();

        let rolling = rolling::rolling(&scores, options.rolling_window, &mut warnings);
        let trends = trend::trends(&scores, &mut warnings);
        let report = Self {
            options: *options,
            summary: summary::summarize(&scores),
            weekly: weekly::weekly(&scores),
            rolling,
            correlation: CorrelationMatrix::build(&scores),
            trends,
            positional: positional::positional_averages(store.players()),
            patterns: patterns::frequent_patterns(store.players()),
            scores,
            warnings,
        };
        tracing::info!(
            players = report.scores.num_players(),
            puzzles = report.scores.num_puzzles(),
            warnings = report.warnings.len(),
            "built report"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use wordstat_engine::Score;

    use super::*;
    use crate::{dataset::RawDataset, names::NameMap};

    const C5: &str = "\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}\u{1F7E9}";
    const A5: &str = "\u{2B1C}\u{2B1C}\u{2B1C}\u{2B1C}\u{2B1C}";

    #[test]
    fn test_two_player_scenario() {
        let mut dataset = RawDataset::new();
        dataset.insert_text("a", 0, format!("{A5}\n{C5}"));
        dataset.insert_text("a", 2, A5.repeat(6));
        dataset.insert_text("b", 1, format!("{}{C5}", A5.repeat(5)));
        let store = PuzzleStore::build(&dataset, &NameMap::new());
        assert_eq!(store.num_puzzles(), 3);

        let report = Report::build(&store, &AnalysisOptions::default());
        assert_eq!(
            report.scores.column(0),
            [Score::Solved(2), Score::NotAttempted, Score::Failed]
        );
        assert_eq!(
            report.scores.column(1),
            [Score::NotAttempted, Score::Solved(6), Score::NotAttempted]
        );
        assert_eq!(report.correlation.r_squared[0][1], None);
        assert_eq!(report.correlation.p_value[1][0], None);

        let summary = &report.summary[0];
        assert_eq!((summary.attempted, summary.missed), (2, 1));
        assert_eq!(summary.mean, Some(4.5));
    }

    #[test]
    fn test_serializes_to_json() {
        let mut dataset = RawDataset::new();
        dataset.insert_text("a", 0, C5);
        let store = PuzzleStore::build(&dataset, &NameMap::new());
        let options = AnalysisOptions {
            rolling_window: NonZeroUsize::MIN,
        };
        let report = Report::build(&store, &options);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["options"]["rolling_window"], 1);
        assert_eq!(json["scores"]["columns"][0][0], 1);
        assert_eq!(json["rolling"][0]["filled"][0], 1.0);
        assert_eq!(json["warnings"][0]["kind"], "insufficient_trend_data");
    }
}
