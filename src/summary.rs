use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// An owned, exportable snapshot of a [`crate::GradeRecord`].
///
/// Holds its own copy of the grades; editing it never reaches back into the
/// record it came from.
pub struct GradeSummary {
    /// * `grades`: every grade, in order
    pub grades:         Vec<f64>,
    /// * `best`: the highest grade at snapshot time
    pub best:           f64,
    /// * `update_counter`: number of first-grade changes so far
    pub update_counter: u64,
}

#[derive(Tabled, Debug, Clone, PartialEq)]
/// A single row of a grade table
pub struct GradeRow {
    #[tabled(rename = "Index")]
    /// * `index`: position of the grade
    pub index: usize,
    #[tabled(rename = "Grade")]
    /// * `grade`: the grade at that position
    pub grade: f64,
}

impl GradeSummary {
    /// One row per grade, in order.
    pub fn rows(&self) -> Vec<GradeRow> {
        self.grades
            .iter()
            .enumerate()
            .map(|(index, &grade)| GradeRow { index, grade })
            .collect()
    }

    /// Renders the grades as a table.
    pub fn table(&self) -> String {
        Table::new(self.rows()).to_string()
    }
}
