use thiserror::Error;

/// A function was evaluated outside of its domain.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{name} is not defined at {input}")]
pub struct DomainError {
    /// Name of the function that rejected the input
    pub name: String,
    /// The rejected input
    pub input: f64,
}

pub type Result<T> = std::result::Result<T, DomainError>;
