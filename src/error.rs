/// An enum to represent the ways a grade record can be rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The grade sequence handed to the constructor was empty.
    #[error("Grades array must not be empty")]
    InvalidArgument,
}

/// Result type for grade record construction.
pub type RecordResult<T> = Result<T, RecordError>;
