#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::{self, Display};

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    error::{RecordError, RecordResult},
    summary::GradeSummary,
};

/// A student's grades, owned exclusively by the record.
///
/// The grade buffer never leaves the record: construction copies the
/// caller's slice in, and every read hands back a fresh copy. The only
/// mutation is [`GradeRecord::change_first_grade`], and every call to it is
/// counted.
#[derive(Clone)]
pub struct GradeRecord {
    /// The grades, never empty. Index 0 is the only mutation target.
    grades:         Vec<f64>,
    /// Number of times `change_first_grade` has been called.
    update_counter: u64,
}

impl GradeRecord {
    /// Creates a new record from a copy of `grades`.
    /// * `grades` - the grades to copy in, must hold at least one value
    ///
    /// Fails with [`RecordError::InvalidArgument`] if `grades` is empty.
    pub fn new(grades: &[f64]) -> RecordResult<Self> {
        if grades.is_empty() {
            tracing::warn!("Refusing to build a grade record from an empty grade list");
            return Err(RecordError::InvalidArgument);
        }

        tracing::debug!("Creating grade record with {} grades", grades.len());
        Ok(Self {
            grades:         grades.to_vec(),
            update_counter: 0,
        })
    }

    /// Returns a copy of all grades, in order.
    pub fn fetch_all_grades(&self) -> Vec<f64> {
        self.grades.to_vec()
    }

    /// Returns the highest grade currently held.
    pub fn find_best_grade(&self) -> f64 {
        // `new` rejects empty input and nothing shrinks the buffer.
        let (first, rest) = self
            .grades
            .split_first()
            .unwrap_or_else(|| unreachable!("grade record is never empty"));
        rest.iter().copied().fold(*first, higher_grade)
    }

    /// Replaces the first grade with `new_grade`.
    pub fn change_first_grade(&mut self, new_grade: f64) {
        self.increment_update_counter();
        self.grades[0] = new_grade;
        tracing::debug!(
            "First grade changed to {new_grade} (update #{})",
            self.update_counter
        );
    }

    /// Returns how many times the first grade has been changed.
    pub fn fetch_update_counter(&self) -> u64 {
        self.update_counter
    }

    /// Builds an owned snapshot of this record for export.
    pub fn summary(&self) -> GradeSummary {
        GradeSummary {
            grades:         self.fetch_all_grades(),
            best:           self.find_best_grade(),
            update_counter: self.fetch_update_counter(),
        }
    }

    /// Bumps the update counter by one.
    fn increment_update_counter(&mut self) {
        self.update_counter += 1;
    }
}

/// The larger of two grades. NaN wins over everything, and `+0.0` beats
/// `-0.0`.
fn higher_grade(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if b > a || (b == a && b.is_sign_positive()) {
        b
    } else {
        a
    }
}

impl TryFrom<&[f64]> for GradeRecord {
    type Error = RecordError;

    fn try_from(grades: &[f64]) -> RecordResult<Self> {
        Self::new(grades)
    }
}

impl TryFrom<&Vec<f64>> for GradeRecord {
    type Error = RecordError;

    fn try_from(grades: &Vec<f64>) -> RecordResult<Self> {
        Self::new(grades.as_slice())
    }
}

impl fmt::Debug for GradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradeRecord").finish_non_exhaustive()
    }
}

impl Display for GradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Best grade={}, Update counter={}",
            self.find_best_grade(),
            self.update_counter
        )
    }
}

/// Serializes as an empty struct; use [`GradeRecord::summary`] to export
/// the grades.
impl Serialize for GradeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_struct("GradeRecord", 0)?.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grades() {
        let err = GradeRecord::new(&[]).expect_err("empty grades must be rejected");
        assert_eq!(err, RecordError::InvalidArgument);
        assert_eq!(err.to_string(), "Grades array must not be empty");
    }

    #[test]
    fn single_grade_is_its_own_best() {
        let record = GradeRecord::new(&[42.5]).expect("build record");
        assert_eq!(record.find_best_grade(), 42.5);
        assert_eq!(record.fetch_all_grades(), vec![42.5]);
    }

    #[test]
    fn best_grade_handles_negatives_and_ties() {
        let record = GradeRecord::new(&[-7.0, -2.0, -2.0, -9.5]).expect("build record");
        assert_eq!(record.find_best_grade(), -2.0);
    }

    #[test]
    fn nan_grade_makes_best_grade_nan() {
        let record = GradeRecord::new(&[1.0, f64::NAN, 4.0]).expect("build record");
        assert!(record.find_best_grade().is_nan());

        let nan_first = GradeRecord::new(&[f64::NAN, 9.0]).expect("build record");
        assert!(nan_first.find_best_grade().is_nan());

        let only_nan = GradeRecord::new(&[f64::NAN]).expect("build record");
        assert!(only_nan.find_best_grade().is_nan());
    }

    #[test]
    fn nan_first_grade_can_be_replaced() {
        let mut record = GradeRecord::new(&[f64::NAN, 9.0]).expect("build record");
        record.change_first_grade(2.0);
        assert_eq!(record.find_best_grade(), 9.0);
    }

    #[test]
    fn positive_zero_beats_negative_zero() {
        for grades in [[-0.0, 0.0], [0.0, -0.0]] {
            let record = GradeRecord::new(&grades).expect("build record");
            let best = record.find_best_grade();
            assert_eq!(best, 0.0);
            assert!(best.is_sign_positive());
        }

        let record = GradeRecord::new(&[-0.0, -0.0]).expect("build record");
        assert!(record.find_best_grade().is_sign_negative());
    }

    #[test]
    fn change_first_grade_only_touches_index_zero() {
        let mut record = GradeRecord::new(&[0.0, 1.0, 2.0, 3.0]).expect("build record");
        record.change_first_grade(101.0);

        assert_eq!(record.fetch_all_grades(), vec![101.0, 1.0, 2.0, 3.0]);
        assert_eq!(record.fetch_update_counter(), 1);
    }

    #[test]
    fn lowering_first_grade_still_counts() {
        let mut record = GradeRecord::new(&[50.0, 10.0]).expect("build record");
        record.change_first_grade(0.0);
        record.change_first_grade(0.0);

        assert_eq!(record.find_best_grade(), 10.0);
        assert_eq!(record.fetch_update_counter(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = GradeRecord::new(&[1.0, 2.0]).expect("build record");
        let copy = original.clone();
        original.change_first_grade(9.0);

        assert_eq!(copy.fetch_all_grades(), vec![1.0, 2.0]);
        assert_eq!(copy.fetch_update_counter(), 0);
    }

    #[test]
    fn debug_and_display_hide_raw_storage() {
        let record = GradeRecord::new(&[0.0, 1.0, 2.0, 3.0]).expect("build record");
        assert_eq!(format!("{record:?}"), "GradeRecord { .. }");
        assert_eq!(record.to_string(), "Best grade=3, Update counter=0");
    }
}
