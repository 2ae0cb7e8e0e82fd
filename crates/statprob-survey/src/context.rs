//! Precomputed survey tables and segment selection
//!
//! [`SurveyContext::build`] runs the whole pipeline once:
//!
//! 1. **Catalog** ([`ShowCatalog`]): index shows by id, rejecting duplicate ids
//! 2. **Join** ([`join::join`]): resolve every answer to a show name
//! 3. **Count** ([`FrequencyCounter`]): one frequency table per [`Segment`]
//! 4. **Distribute** ([`DistributionTable`]): PDF/CDF columns per segment
//!
//! The context is immutable afterwards. Selecting a segment is a lookup into
//! the precomputed tables and never recomputes anything, so a context can be
//! shared read-only between any number of callers.

use serde::Serialize;
use statprob_stats::distribution::{DistributionError, DistributionTable};

use crate::{
    counter::{FrequencyCounter, ZeroCategoryPolicy},
    error::SurveyError,
    join::{self, JoinedObservation, ShowCatalog},
    record::{Gender, RecordId, SurveyData},
    segment::Segment,
};

/// One line of the survey data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub student_id: RecordId,
    pub name: String,
    pub gender: Gender,
    pub show: String,
}

/// The table selected for a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentView<'a> {
    pub segment: Segment,
    /// Display label of the segment
    pub label: &'static str,
    /// Number of students in the segment
    pub total: usize,
    pub table: &'a DistributionTable,
}

/// Stored result for one segment. `None` when the segment has no students.
#[derive(Debug, Clone)]
struct SegmentEntry {
    total: usize,
    table: Option<DistributionTable>,
}

/// Immutable survey state built once per loaded dataset.
#[derive(Debug, Clone)]
pub struct SurveyContext {
    policy: ZeroCategoryPolicy,
    categories: Vec<String>,
    roster: Vec<RosterEntry>,
    overall: SegmentEntry,
    male: SegmentEntry,
    female: SegmentEntry,
}

impl SurveyContext {
    /// Computes the distribution tables of every segment.
    ///
    /// A segment without students does not fail the build; selecting it
    /// later returns [`SurveyError::NoData`].
    ///
    /// # Errors
    ///
    /// - [`SurveyError::Reference`] if a show id is duplicated or unresolved
    /// - [`SurveyError::Distribution`] if a frequency table disagrees with its segment size
    ///
    /// # Examples
    ///
    /// ```
    /// # use statprob_survey::{
    /// #     context::SurveyContext, counter::ZeroCategoryPolicy, record::SurveyData,
    /// #     segment::Segment,
    /// # };
    /// let data = SurveyData::from_json(
    ///     r#"{
    ///         "students": [
    ///             { "id": 1, "name": "A", "gender": "male", "most_like_show": 1 },
    ///             { "id": 2, "name": "B", "gender": "female", "most_like_show": 2 },
    ///             { "id": 3, "name": "C", "gender": "male", "most_like_show": 1 }
    ///         ],
    ///         "shows": [{ "id": 1, "name": "Olahraga" }, { "id": 2, "name": "Sinetron" }]
    ///     }"#,
    /// )
    /// .unwrap();
    /// let context = SurveyContext::build(&data, ZeroCategoryPolicy::Omit).unwrap();
    ///
    /// let view = context.select("male").unwrap();
    /// assert_eq!(view.segment, Segment::Male);
    /// assert_eq!(view.total, 2);
    /// assert_eq!(view.table.rows()[0].pdf_trace, "2/2 = 1.0000");
    /// ```
    pub fn build(data: &SurveyData, policy: ZeroCategoryPolicy) -> Result<Self, SurveyError> {
        let catalog = ShowCatalog::new(&data.shows)?;
        let joined = join::join(&data.students, &catalog)?;
        let counter = FrequencyCounter::new(policy, catalog.shows());

        let overall = Self::build_segment(&counter, &joined, Segment::Overall)?;
        let male = Self::build_segment(&counter, &joined, Segment::Male)?;
        let female = Self::build_segment(&counter, &joined, Segment::Female)?;

        let roster = joined
            .iter()
            .map(|row| RosterEntry {
                student_id: row.student.id.clone(),
                name: row.student.name.clone(),
                gender: row.student.gender,
                show: row.show.name.clone(),
            })
            .collect();
        let categories = catalog.shows().iter().map(|s| s.name.clone()).collect();

        tracing::debug!(
            students = data.students.len(),
            shows = catalog.len(),
            %policy,
            "survey context built"
        );

        Ok(Self {
            policy,
            categories,
            roster,
            overall,
            male,
            female,
        })
    }

    fn build_segment(
        counter: &FrequencyCounter<'_>,
        joined: &[JoinedObservation<'_>],
        segment: Segment,
    ) -> Result<SegmentEntry, SurveyError> {
        let total = joined
            .iter()
            .filter(|row| segment.includes(row.student.gender))
            .count();
        let frequencies = counter.count_segment(joined, segment);

        let table = match DistributionTable::new(&frequencies, total) {
            Ok(table) => Some(table),
            Err(DistributionError::ZeroTotal) => {
                tracing::warn!(%segment, "segment has no observations");
                None
            }
            Err(source) => return Err(SurveyError::Distribution { segment, source }),
        };

        if let Some(table) = &table {
            tracing::debug!(%segment, total, rows = table.len(), "distribution table built");
            for row in table {
                tracing::trace!(
                    %segment,
                    show = %row.label,
                    pdf = %row.pdf_trace,
                    cdf = %row.cdf_trace,
                    "distribution row"
                );
            }
        }

        Ok(SegmentEntry { total, table })
    }

    fn entry(&self, segment: Segment) -> &SegmentEntry {
        match segment {
            Segment::Overall => &self.overall,
            Segment::Male => &self.male,
            Segment::Female => &self.female,
        }
    }

    /// Returns the precomputed table of `segment`.
    ///
    /// # Errors
    ///
    /// [`SurveyError::NoData`] if the segment has no students.
    pub fn segment(&self, segment: Segment) -> Result<SegmentView<'_>, SurveyError> {
        let entry = self.entry(segment);
        let table = entry
            .table
            .as_ref()
            .ok_or(SurveyError::NoData { segment })?;
        Ok(SegmentView {
            segment,
            label: segment.label(),
            total: entry.total,
            table,
        })
    }

    /// Parses a selector value and returns its table.
    ///
    /// # Errors
    ///
    /// - [`SurveyError::InvalidChoice`] if `choice` is not a segment
    /// - [`SurveyError::NoData`] if the segment has no students
    pub fn select(&self, choice: &str) -> Result<SegmentView<'_>, SurveyError> {
        let segment = choice.parse::<Segment>()?;
        self.segment(segment)
    }

    /// Number of students in `segment`, including empty segments.
    #[must_use]
    pub fn total(&self, segment: Segment) -> usize {
        self.entry(segment).total
    }

    #[must_use]
    pub fn policy(&self) -> ZeroCategoryPolicy {
        self.policy
    }

    /// Offered show names in catalog order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Survey answers in input order with resolved show names.
    #[must_use]
    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }
}
