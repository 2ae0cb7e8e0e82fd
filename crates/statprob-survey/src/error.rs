use statprob_stats::distribution::DistributionError;

use crate::{record::RecordId, segment::Segment};

/// A show reference that does not resolve to exactly one show.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ReferenceError {
    #[display("student '{student_id}' references unknown show '{show_id}'")]
    Unresolved {
        student_id: RecordId,
        show_id: RecordId,
    },
    #[display("show id '{show_id}' is used by more than one show")]
    DuplicateCategory { show_id: RecordId },
}

/// A segment choice outside of overall/male/female.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("'{choice}' is not a segment (expected overall, male or female)")]
pub struct InvalidChoiceError {
    pub choice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SurveyError {
    #[display("invalid show reference")]
    Reference(ReferenceError),
    #[display("invalid segment selection")]
    InvalidChoice(InvalidChoiceError),
    #[display("inconsistent frequency table for segment {segment}")]
    Distribution {
        segment: Segment,
        source: DistributionError,
    },
    #[display("no data for segment {segment}")]
    NoData { segment: Segment },
}

impl From<ReferenceError> for SurveyError {
    fn from(err: ReferenceError) -> Self {
        SurveyError::Reference(err)
    }
}

impl From<InvalidChoiceError> for SurveyError {
    fn from(err: InvalidChoiceError) -> Self {
        SurveyError::InvalidChoice(err)
    }
}
