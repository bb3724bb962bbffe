//! Score derivation and statistics over shared word-puzzle results.
//!
//! # Overview
//!
//! Data flows strictly one way:
//!
//! ```text
//! RawDataset ──► PuzzleStore ──► ScoreMatrix ──► statistics
//!  (texts,        (sparse grid     (puzzle × player
//!   stacks)        stacks, global   scores, padded)
//!                  puzzle count)
//! ```
//!
//! 1. **Load** ([`dataset::RawDataset`]): share texts and optional materialized
//!    grid stacks per sender, in first-appearance order
//! 2. **Resolve names** ([`names::NameMap`]): map senders to display names;
//!    senders sharing a name become one player
//! 3. **Encode** ([`store::PuzzleStore`]): one sparse grid stack per player and
//!    the global puzzle count
//! 4. **Score** ([`matrix::ScoreMatrix`]): solve score per puzzle and player
//! 5. **Analyze**: independent pure functions over the matrix or the stacks
//!    - [`summary`]: participation, gaps, streaks, score distribution
//!    - [`weekly`]: per-weekday attempts and solve means
//!    - [`rolling`]: moving average over attempted puzzles
//!    - [`correlation`]: pairwise r² and p-values between players
//!    - [`trend`]: linear fit of score against puzzle number
//!    - [`positional`]: per-cell mean symbol codes
//!    - [`patterns`]: most frequent feedback rows per guess
//!
//! [`report::Report`] runs all of the above in one call.
//!
//! Insufficient data never fails a computation; it produces an
//! [`warning::AnalysisWarning`] and leaves that player's result undefined.
//!
//! # Examples
//!
//! ```
//! use wordstat_analysis::{dataset::RawDataset, names::NameMap, store::PuzzleStore};
//! use wordstat_engine::Score;
//!
//! let json = r#"{
//!     "ann@example.com": { "0": "⬜⬜⬜⬜⬜\n🟩🟩🟩🟩🟩" },
//!     "bob@example.com": { "1": "⬜" }
//! }"#;
//! let dataset: RawDataset = serde_json::from_str(json).unwrap();
//! let names = NameMap::from_iter([("ann@example.com", "Ann")]);
//!
//! let store = PuzzleStore::build(&dataset, &names);
//! let matrix = store.score_matrix();
//! assert_eq!(matrix.players(), ["Ann", "bob@example.com"]);
//! assert_eq!(matrix.column(0), [Score::Solved(2), Score::NotAttempted]);
//! assert_eq!(matrix.column(1), [Score::NotAttempted, Score::Failed]);
//! ```

pub mod correlation;
pub mod dataset;
pub mod matrix;
pub mod names;
pub mod patterns;
pub mod positional;
pub mod report;
pub mod rolling;
pub mod store;
pub mod summary;
pub mod trend;
pub mod warning;
pub mod weekly;
