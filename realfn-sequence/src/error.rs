use thiserror::Error;

/// An index was outside of the occupied slots of a sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} out of bounds for length {len}")]
pub struct IndexError {
    /// The requested index
    pub index: usize,
    /// The length of the sequence at the time of the request
    pub len: usize,
}

pub type Result<T> = std::result::Result<T, IndexError>;
