//! Error types for sequence traversal
//!
//! Pulling past the end of a sequence is a programmer error and is reported
//! loudly through [`SequenceError`]. An absent seed given to one of the
//! `unfold` entry points is not an error: it produces an empty sequence.

/// Main error type for strict sequence pulls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A strict pull was made after the named adapter ran out of elements
    #[error("{adapter} is exhausted: no element available to pull")]
    Exhausted { adapter: &'static str },
}

impl SequenceError {
    pub fn exhausted(adapter: &'static str) -> Self {
        SequenceError::Exhausted { adapter }
    }

    /// Name of the adapter that detected the violation.
    pub fn adapter(&self) -> &'static str {
        match self {
            SequenceError::Exhausted { adapter } => adapter,
        }
    }
}

/// Result type for strict sequence pulls
pub type SequenceResult<T> = Result<T, SequenceError>;
