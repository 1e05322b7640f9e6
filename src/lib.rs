//! # gradebook
//!
//! An encapsulated record of one student's grades. The record owns its
//! grades outright, hands out copies only, and counts every change made to
//! the first grade.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Settings for the command line driver
pub mod config;
/// Errors raised while building a record
pub mod error;
/// The grade record itself
pub mod record;
/// Exportable snapshots of a record
pub mod summary;

pub use error::{RecordError, RecordResult};
pub use record::GradeRecord;
pub use summary::{GradeRow, GradeSummary};
