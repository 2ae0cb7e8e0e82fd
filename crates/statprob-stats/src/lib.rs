//! Categorical distribution utilities for the StatProb project.
//!
//! This crate turns labelled categorical observations into auditable
//! probability tables:
//!
//! - **Frequency tables**: Count occurrences per label, ordered by descending frequency
//! - **Cumulative sums**: An explicit running-sum accumulator producing CDF steps
//! - **Distribution tables**: PDF, CDF and percentage columns with formatted traces
//! - **Rounding**: Presentation rounding that matches half-to-even decimal rounding
//!
//! # Modules
//!
//! - [`frequency`]: Frequency counting for categorical labels
//! - [`cumulative`]: Running-sum accumulator used to build CDF columns
//! - [`distribution`]: PDF/CDF tables built from frequency tables
//! - [`rounding`]: Decimal rounding helpers for display values
//!
//! # Examples
//!
//! ## Counting labels
//!
//! ```
//! use statprob_stats::frequency::FrequencyTable;
//!
//! let table = FrequencyTable::count(["Sinetron", "Olahraga", "Sinetron"]);
//! assert_eq!(table.rows()[0].label, "Sinetron");
//! assert_eq!(table.rows()[0].frequency, 2);
//! assert_eq!(table.total(), 3);
//! ```
//!
//! ## Building a distribution
//!
//! ```
//! use statprob_stats::{distribution::DistributionTable, frequency::FrequencyTable};
//!
//! let frequencies = FrequencyTable::count(["Film Drama", "Film Drama", "Olahraga", "Sinetron"]);
//! let table = DistributionTable::new(&frequencies, 4).unwrap();
//!
//! assert_eq!(table.rows()[0].pdf_trace, "2/4 = 0.5000");
//! assert_eq!(table.rows()[1].cdf_trace, "0.5000 + 0.2500 = 0.7500");
//! assert_eq!(table.rows()[2].percentage, 25.0);
//! ```

pub mod cumulative;
pub mod distribution;
pub mod frequency;
pub mod rounding;
