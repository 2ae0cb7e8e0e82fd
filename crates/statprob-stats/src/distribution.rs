//! Probability distributions over categorical frequency tables
//!
//! A [`DistributionTable`] extends each [`FrequencyRow`] with:
//!
//! - `pdf`: `frequency / total`
//! - `pdf_trace`: `"<frequency>/<total> = <pdf>"`
//! - `cdf`: prefix sum of `pdf` in table order (see [`crate::cumulative`])
//! - `cdf_trace`: derivation of `cdf` from the previous running sum
//! - `percentage`: `pdf * 100` rounded to two decimals
//!
//! `pdf` and `cdf` keep full precision. Only the trace strings and the
//! percentage column are rounded.

use serde::Serialize;

use crate::{
    cumulative::{self, CdfStep},
    frequency::{FrequencyRow, FrequencyTable},
    rounding::{self, format_trace_value},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DistributionError {
    /// No observations to divide by.
    #[display("cannot build a distribution over zero observations")]
    ZeroTotal,
    /// The declared total disagrees with the frequency table.
    #[display("frequencies sum to {actual} but the declared total is {expected}")]
    TotalMismatch { expected: usize, actual: usize },
}

/// A frequency row with its probability columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionRow {
    /// Category label
    pub label: String,
    /// Number of observations with this label
    pub frequency: usize,
    /// Probability of this label, in `[0, 1]`
    pub pdf: f64,
    /// Derivation of `pdf`, e.g. `"7/20 = 0.3500"`
    pub pdf_trace: String,
    /// Cumulative probability up to and including this row
    pub cdf: f64,
    /// Derivation of `cdf`, e.g. `"0.4000 + 0.2500 = 0.6500"`
    pub cdf_trace: String,
    /// `pdf` as a percentage rounded to two decimals
    pub percentage: f64,
}

/// PDF/CDF table computed from a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionTable {
    total: usize,
    rows: Vec<DistributionRow>,
}

impl DistributionTable {
    /// Computes the distribution of `frequencies` over `total` observations.
    ///
    /// Rows keep the order of `frequencies`; the CDF is accumulated in that
    /// order.
    ///
    /// # Errors
    ///
    /// - [`DistributionError::ZeroTotal`] if `total` is zero
    /// - [`DistributionError::TotalMismatch`] if the frequencies do not sum to `total`
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_stats::{
    /// #     distribution::{DistributionError, DistributionTable},
    /// #     frequency::FrequencyTable,
    /// # };
    /// let frequencies = FrequencyTable::count(["a", "a", "b"]);
    ///
    /// let table = DistributionTable::new(&frequencies, 3).unwrap();
    /// assert_eq!(table.rows()[1].pdf_trace, "1/3 = 0.3333");
    ///
    /// assert_eq!(
    ///     DistributionTable::new(&frequencies, 4),
    ///     Err(DistributionError::TotalMismatch { expected: 4, actual: 3 })
    /// );
    /// ```
    #[expect(clippy::cast_precision_loss)]
    pub fn new(frequencies: &FrequencyTable, total: usize) -> Result<Self, DistributionError> {
        if total == 0 {
            return Err(DistributionError::ZeroTotal);
        }
        let actual = frequencies.total();
        if actual != total {
            return Err(DistributionError::TotalMismatch {
                expected: total,
                actual,
            });
        }

        let denominator = total as f64;
        let steps = cumulative::cumulative_steps(
            frequencies
                .iter()
                .map(|row| row.frequency as f64 / denominator),
        );
        let rows = frequencies
            .iter()
            .zip(&steps)
            .map(|(row, step)| Self::build_row(row, total, step))
            .collect();

        Ok(Self { total, rows })
    }

    /// Computes the distribution using the frequency table's own total.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self, DistributionError> {
        Self::new(frequencies, frequencies.total())
    }

    fn build_row(row: &FrequencyRow, total: usize, step: &CdfStep) -> DistributionRow {
        let pdf = step.probability;
        DistributionRow {
            label: row.label.clone(),
            frequency: row.frequency,
            pdf,
            pdf_trace: format!("{}/{} = {}", row.frequency, total, format_trace_value(pdf)),
            cdf: step.cumulative,
            cdf_trace: step.trace(),
            percentage: rounding::percentage(pdf),
        }
    }

    /// Number of observations the table was computed over.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn rows(&self) -> &[DistributionRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistributionRow> {
        self.rows.iter()
    }

    /// Returns the row for `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&DistributionRow> {
        self.rows.iter().find(|row| row.label == label)
    }
}

impl<'a> IntoIterator for &'a DistributionTable {
    type Item = &'a DistributionRow;
    type IntoIter = std::slice::Iter<'a, DistributionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn frequencies(rows: &[(&str, usize)]) -> FrequencyTable {
        FrequencyTable::from_rows(
            rows.iter()
                .map(|&(label, frequency)| FrequencyRow {
                    label: label.to_owned(),
                    frequency,
                })
                .collect(),
        )
    }

    fn survey_example() -> DistributionTable {
        let table = frequencies(&[
            ("Film Drama", 8),
            ("Olahraga", 5),
            ("Sinetron", 4),
            ("Infotainment", 3),
        ]);
        DistributionTable::new(&table, 20).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPSILON, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_survey_example_columns() {
        let table = survey_example();
        let pdf = table.iter().map(|r| r.pdf).collect::<Vec<_>>();
        let cdf = table.iter().map(|r| r.cdf).collect::<Vec<_>>();
        let percentage = table.iter().map(|r| r.percentage).collect::<Vec<_>>();

        assert_close(&pdf, &[0.40, 0.25, 0.20, 0.15]);
        assert_close(&cdf, &[0.40, 0.65, 0.85, 1.00]);
        assert_eq!(percentage, [40.0, 25.0, 20.0, 15.0]);
        assert_eq!(table.total(), 20);
    }

    #[test]
    fn test_survey_example_traces() {
        let table = survey_example();
        let rows = table.rows();
        assert_eq!(rows[0].pdf_trace, "8/20 = 0.4000");
        assert_eq!(rows[0].cdf_trace, "0.4000 = 0.4000");
        assert_eq!(rows[1].pdf_trace, "5/20 = 0.2500");
        assert_eq!(rows[1].cdf_trace, "0.4000 + 0.2500 = 0.6500");
        assert_eq!(rows[3].cdf_trace, "0.8500 + 0.1500 = 1.0000");
    }

    #[test]
    fn test_zero_total() {
        let table = FrequencyTable::default();
        assert_eq!(
            DistributionTable::new(&table, 0),
            Err(DistributionError::ZeroTotal)
        );
        assert_eq!(
            DistributionTable::from_frequencies(&table),
            Err(DistributionError::ZeroTotal)
        );
    }

    #[test]
    fn test_total_mismatch() {
        let table = frequencies(&[("a", 2), ("b", 1)]);
        assert_eq!(
            DistributionTable::new(&table, 5),
            Err(DistributionError::TotalMismatch {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn test_probability_invariants() {
        let table = frequencies(&[("a", 7), ("b", 5), ("c", 3), ("d", 3), ("e", 2), ("f", 1)]);
        let table = DistributionTable::from_frequencies(&table).unwrap();

        let pdf_sum = table.iter().map(|r| r.pdf).sum::<f64>();
        assert!((pdf_sum - 1.0).abs() < EPSILON);

        let last = table.rows().last().unwrap();
        assert!((last.cdf - 1.0).abs() < EPSILON);
        assert!(table.rows().is_sorted_by(|a, b| a.cdf <= b.cdf));

        let mut prefix = 0.0;
        for row in &table {
            prefix += row.pdf;
            assert_eq!(row.cdf, prefix);
            assert_eq!(row.percentage, rounding::round_half_even(row.pdf * 100.0, 2));
        }
    }

    #[test]
    fn test_pdf_trace_suffix_matches_pdf() {
        let table = frequencies(&[("a", 7), ("b", 6), ("c", 4), ("d", 3), ("e", 1)]);
        let table = DistributionTable::from_frequencies(&table).unwrap();
        for row in &table {
            let (_, suffix) = row.pdf_trace.rsplit_once(" = ").unwrap();
            let parsed = suffix.parse::<f64>().unwrap();
            assert_eq!(format_trace_value(parsed), format_trace_value(row.pdf));
            assert!((parsed - row.pdf).abs() <= 0.000_05);
        }
    }

    #[test]
    fn test_cdf_keeps_input_order() {
        let table = frequencies(&[("rare", 1), ("common", 3)]);
        let table = DistributionTable::from_frequencies(&table).unwrap();
        assert_eq!(table.rows()[0].label, "rare");
        assert_eq!(table.rows()[0].cdf, 0.25);
        assert_eq!(table.rows()[1].cdf_trace, "0.2500 + 0.7500 = 1.0000");
    }

    #[test]
    fn test_rows_follow_cumulative_steps() {
        let table = survey_example();
        let steps = cumulative::cumulative_steps(table.iter().map(|r| r.pdf));
        assert_eq!(steps.len(), table.len());
        for (row, step) in table.iter().zip(&steps) {
            assert_eq!(row.pdf, step.probability);
            assert_eq!(row.cdf, step.cumulative);
            assert_eq!(row.cdf_trace, step.trace());
        }
    }

    #[test]
    fn test_zero_frequency_rows() {
        let table = frequencies(&[("a", 2), ("b", 2), ("c", 0)]);
        let table = DistributionTable::from_frequencies(&table).unwrap();
        let zero = table.get("c").unwrap();
        assert_eq!(zero.pdf, 0.0);
        assert_eq!(zero.percentage, 0.0);
        assert_eq!(zero.pdf_trace, "0/4 = 0.0000");
        assert_eq!(zero.cdf_trace, "1.0000 + 0.0000 = 1.0000");
    }

    #[test]
    fn test_deterministic_output() {
        assert_eq!(survey_example(), survey_example());
        let first = serde_json::to_string(&survey_example()).unwrap();
        let second = serde_json::to_string(&survey_example()).unwrap();
        assert_eq!(first, second);
    }
}
