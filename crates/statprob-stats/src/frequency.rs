//! Frequency tables for categorical data
//!
//! A [`FrequencyTable`] counts how often each label occurs. Rows are ordered
//! by descending frequency; labels with equal counts keep the order in which
//! they were first encountered.
//!
//! Labels that never occur are absent from a counted table. Use
//! [`FrequencyTable::with_zero_rows`] to list them explicitly with a
//! frequency of zero.

use std::collections::HashMap;

use serde::Serialize;

/// A single label and the number of times it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    /// Category label (e.g. a show name)
    pub label: String,
    /// Number of observations carrying this label
    pub frequency: usize,
}

/// Frequency distribution over categorical labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Creates a table from rows in the given order.
    ///
    /// No sorting or merging is done; callers that need counter ordering
    /// should use [`FrequencyTable::count`].
    #[must_use]
    pub fn from_rows(rows: Vec<FrequencyRow>) -> Self {
        Self { rows }
    }

    /// Counts label occurrences.
    ///
    /// Rows are sorted by descending frequency with a stable sort, so ties
    /// keep first-encountered order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_stats::frequency::FrequencyTable;
    /// let table = FrequencyTable::count(["b", "a", "a", "c", "b", "a"]);
    /// let labels = table.rows().iter().map(|r| r.label.as_str()).collect::<Vec<_>>();
    /// assert_eq!(labels, ["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn count<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = HashMap::<String, usize>::new();
        let mut rows = Vec::<FrequencyRow>::new();

        for label in labels {
            let label = label.as_ref();
            if let Some(&i) = index.get(label) {
                rows[i].frequency += 1;
            } else {
                index.insert(label.to_owned(), rows.len());
                rows.push(FrequencyRow {
                    label: label.to_owned(),
                    frequency: 1,
                });
            }
        }

        let mut table = Self { rows };
        table.sort_descending();
        table
    }

    /// Returns a table that also lists every label of `domain` missing from
    /// this table, with a frequency of zero.
    ///
    /// Missing labels are appended in `domain` order after the existing rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_stats::frequency::FrequencyTable;
    /// let table = FrequencyTable::count(["b"]).with_zero_rows(["a", "b", "c"]);
    /// let rows = table
    ///     .rows()
    ///     .iter()
    ///     .map(|r| (r.label.as_str(), r.frequency))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(rows, [("b", 1), ("a", 0), ("c", 0)]);
    /// ```
    #[must_use]
    pub fn with_zero_rows<I, S>(mut self, domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in domain {
            let label = label.as_ref();
            if !self.rows.iter().any(|row| row.label == label) {
                self.rows.push(FrequencyRow {
                    label: label.to_owned(),
                    frequency: 0,
                });
            }
        }
        self.sort_descending();
        self
    }

    fn sort_descending(&mut self) {
        self.rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    }

    #[must_use]
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Sum of all frequencies.
    #[must_use]
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.frequency).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyRow;
    type IntoIter = std::slice::Iter<'a, FrequencyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(table: &FrequencyTable) -> Vec<(&str, usize)> {
        table
            .iter()
            .map(|row| (row.label.as_str(), row.frequency))
            .collect()
    }

    #[test]
    fn test_empty_labels() {
        let table = FrequencyTable::count(Vec::<&str>::new());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_descending_order() {
        let table = FrequencyTable::count(["x", "y", "y", "z", "z", "z"]);
        assert_eq!(pairs(&table), [("z", 3), ("y", 2), ("x", 1)]);
    }

    #[test]
    fn test_ties_keep_first_encountered_order() {
        let table = FrequencyTable::count(["Sinetron", "Olahraga", "Infotainment", "Olahraga"]);
        assert_eq!(
            pairs(&table),
            [("Olahraga", 2), ("Sinetron", 1), ("Infotainment", 1)]
        );
    }

    #[test]
    fn test_total_matches_observation_count() {
        let labels = ["a", "b", "a", "c", "a", "b", "d"];
        let table = FrequencyTable::count(labels);
        assert_eq!(table.total(), labels.len());
    }

    #[test]
    fn test_zero_rows_do_not_change_total() {
        let table = FrequencyTable::count(["a", "a", "b"]);
        let with_zeros = table.clone().with_zero_rows(["c", "a", "d"]);
        assert_eq!(with_zeros.total(), table.total());
        assert_eq!(pairs(&with_zeros), [("a", 2), ("b", 1), ("c", 0), ("d", 0)]);
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let table = FrequencyTable::from_rows(vec![
            FrequencyRow {
                label: "low".into(),
                frequency: 1,
            },
            FrequencyRow {
                label: "high".into(),
                frequency: 9,
            },
        ]);
        assert_eq!(pairs(&table), [("low", 1), ("high", 9)]);
    }

    #[test]
    fn test_serializes_as_row_list() {
        let table = FrequencyTable::count(["a"]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!([{ "label": "a", "frequency": 1 }]));
    }
}
