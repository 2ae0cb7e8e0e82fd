//! Frequency counting over joined survey answers

use statprob_stats::frequency::FrequencyTable;

use crate::{join::JoinedObservation, record::Show, segment::Segment};

/// How shows that received no votes appear in frequency tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum ZeroCategoryPolicy {
    /// Only shows with at least one vote are listed.
    #[default]
    #[display("omit")]
    Omit,
    /// Every offered show is listed; unvoted shows get a zero row after the
    /// voted ones, in catalog order.
    #[display("include")]
    Include,
}

/// Counts answers per show name.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyCounter<'a> {
    policy: ZeroCategoryPolicy,
    shows: &'a [Show],
}

impl<'a> FrequencyCounter<'a> {
    /// Creates a counter whose domain is `shows`, used by
    /// [`ZeroCategoryPolicy::Include`].
    #[must_use]
    pub fn new(policy: ZeroCategoryPolicy, shows: &'a [Show]) -> Self {
        Self { policy, shows }
    }

    #[must_use]
    pub fn policy(&self) -> ZeroCategoryPolicy {
        self.policy
    }

    /// Counts the answers of rows accepted by `predicate`.
    ///
    /// The table is ordered by descending frequency; ties keep the order in
    /// which show names were first encountered.
    #[must_use]
    pub fn count<P>(&self, rows: &[JoinedObservation<'_>], mut predicate: P) -> FrequencyTable
    where
        P: FnMut(&JoinedObservation<'_>) -> bool,
    {
        let table = FrequencyTable::count(
            rows.iter()
                .filter(|&row| predicate(row))
                .map(|row| row.show.name.as_str()),
        );
        match self.policy {
            ZeroCategoryPolicy::Omit => table,
            ZeroCategoryPolicy::Include => {
                table.with_zero_rows(self.shows.iter().map(|show| show.name.as_str()))
            }
        }
    }

    /// Counts every row.
    #[must_use]
    pub fn count_all(&self, rows: &[JoinedObservation<'_>]) -> FrequencyTable {
        self.count(rows, |_| true)
    }

    /// Counts the rows of students belonging to `segment`.
    #[must_use]
    pub fn count_segment(
        &self,
        rows: &[JoinedObservation<'_>],
        segment: Segment,
    ) -> FrequencyTable {
        self.count(rows, |row| segment.includes(row.student.gender))
    }
}
