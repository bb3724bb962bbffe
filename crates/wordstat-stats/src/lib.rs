//! Statistical primitives for the wordstat project.
//!
//! This crate is dependency-free and works on plain `f64` samples:
//!
//! - **Descriptive statistics**: mean, median, variance, standard deviation, standard error
//! - **Correlation**: Pearson's r with a two-sided t-test p-value
//! - **Regression**: ordinary least-squares line fitting
//! - **Rolling windows**: simple moving averages
//! - **Frequency tables**: exact-match counting with deterministic ranking
//!
//! # Modules
//!
//! - [`descriptive`]: Summary statistics for a sample
//! - [`correlation`]: Pearson correlation and its significance
//! - [`regression`]: Linear trend fitting
//! - [`rolling`]: Moving averages over a fixed window
//! - [`frequency`]: Counting and ranking repeated values
//! - [`special`]: Gamma and incomplete beta functions used by the tests above
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use wordstat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Correlating two series
//!
//! ```
//! use wordstat_stats::correlation::Correlation;
//!
//! let xs = [3.0, 4.0, 2.0, 5.0, 4.0];
//! let ys = [4.0, 4.0, 3.0, 6.0, 5.0];
//! let corr = Correlation::pearson(xs.into_iter().zip(ys)).unwrap();
//! assert!(corr.r > 0.8);
//! assert!((0.0..=1.0).contains(&corr.p_value));
//! ```
//!
//! ## Fitting a trend line
//!
//! ```
//! use wordstat_stats::regression::LinearFit;
//!
//! let fit = LinearFit::fit([(10.0, 5.0), (11.0, 4.0), (12.0, 3.0)]).unwrap();
//! assert!((fit.slope + 1.0).abs() < 1e-12);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod frequency;
pub mod regression;
pub mod rolling;
pub mod special;
