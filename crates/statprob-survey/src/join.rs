//! Resolution of student answers to show names
//!
//! Every student references the show they like most by id. Joining replaces
//! that id with the show record so later stages can group by display name.
//! An answer that cannot be resolved is an error: silently dropping it would
//! make segment totals disagree with the frequency tables.

use std::collections::HashMap;

use crate::{
    error::ReferenceError,
    record::{RecordId, Show, Student},
};

/// Show catalog indexed by id.
#[derive(Debug, Clone)]
pub struct ShowCatalog<'a> {
    shows: &'a [Show],
    index: HashMap<&'a RecordId, usize>,
}

impl<'a> ShowCatalog<'a> {
    /// Indexes `shows` by id.
    ///
    /// # Errors
    ///
    /// [`ReferenceError::DuplicateCategory`] if two shows share an id.
    pub fn new(shows: &'a [Show]) -> Result<Self, ReferenceError> {
        let mut index = HashMap::with_capacity(shows.len());
        for (i, show) in shows.iter().enumerate() {
            if index.insert(&show.id, i).is_some() {
                return Err(ReferenceError::DuplicateCategory {
                    show_id: show.id.clone(),
                });
            }
        }
        Ok(Self { shows, index })
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&'a Show> {
        self.index.get(id).map(|&i| &self.shows[i])
    }

    /// Shows in catalog order.
    #[must_use]
    pub fn shows(&self) -> &'a [Show] {
        self.shows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

/// A student paired with the show they chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinedObservation<'a> {
    pub student: &'a Student,
    pub show: &'a Show,
}

/// Pairs every student with their chosen show, preserving order.
///
/// # Errors
///
/// [`ReferenceError::Unresolved`] for the first student whose show id is not
/// in the catalog.
///
/// # Examples
///
/// ```
/// # use statprob_survey::{join::{self, ShowCatalog}, record::SurveyData};
/// let data = SurveyData::from_json(
///     r#"{
///         "students": [
///             { "id": 1, "name": "A", "gender": "male", "most_like_show": 2 },
///             { "id": 2, "name": "B", "gender": "female", "most_like_show": 1 }
///         ],
///         "shows": [{ "id": 1, "name": "Olahraga" }, { "id": 2, "name": "Sinetron" }]
///     }"#,
/// )
/// .unwrap();
/// let catalog = ShowCatalog::new(&data.shows).unwrap();
/// let joined = join::join(&data.students, &catalog).unwrap();
/// assert_eq!(joined[0].show.name, "Sinetron");
/// assert_eq!(joined[1].show.name, "Olahraga");
/// ```
pub fn join<'a>(
    students: &'a [Student],
    catalog: &ShowCatalog<'a>,
) -> Result<Vec<JoinedObservation<'a>>, ReferenceError> {
    students
        .iter()
        .map(|student| {
            let show = catalog
                .get(&student.show_id)
                .ok_or_else(|| ReferenceError::Unresolved {
                    student_id: student.id.clone(),
                    show_id: student.show_id.clone(),
                })?;
            Ok(JoinedObservation { student, show })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Gender;

    fn show(id: u64, name: &str) -> Show {
        Show {
            id: id.into(),
            name: name.to_owned(),
        }
    }

    fn student(id: &str, show_id: u64) -> Student {
        Student {
            id: id.into(),
            name: format!("Student {id}"),
            gender: Gender::Female,
            show_id: show_id.into(),
        }
    }

    #[test]
    fn test_join_preserves_order_and_length() {
        let shows = [show(1, "Olahraga"), show(2, "Sinetron"), show(3, "Film Drama")];
        let students = [student("a", 3), student("b", 1), student("c", 3), student("d", 2)];
        let catalog = ShowCatalog::new(&shows).unwrap();

        let joined = join(&students, &catalog).unwrap();
        let names = joined.iter().map(|j| j.show.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Film Drama", "Olahraga", "Film Drama", "Sinetron"]);
        assert!(joined.iter().zip(&students).all(|(j, s)| j.student == s));
    }

    #[test]
    fn test_unresolved_reference() {
        let shows = [show(1, "Olahraga")];
        let students = [student("a", 1), student("b", 9)];
        let catalog = ShowCatalog::new(&shows).unwrap();

        assert_eq!(
            join(&students, &catalog),
            Err(ReferenceError::Unresolved {
                student_id: "b".into(),
                show_id: 9_u64.into(),
            })
        );
    }

    #[test]
    fn test_duplicate_show_id() {
        let shows = [show(1, "Olahraga"), show(1, "Sinetron")];
        assert_eq!(
            ShowCatalog::new(&shows).unwrap_err(),
            ReferenceError::DuplicateCategory { show_id: 1_u64.into() }
        );
    }

    #[test]
    fn test_empty_inputs() {
        let catalog = ShowCatalog::new(&[]).unwrap();
        assert!(catalog.is_empty());
        assert!(join(&[], &catalog).unwrap().is_empty());
    }
}
