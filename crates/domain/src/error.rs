//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building descriptors or environments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An environment assignment is not of the form `KEY=VALUE`.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(String),

    /// A variable name is empty or otherwise unusable.
    #[error("invalid variable name: {0:?}")]
    InvalidVariableName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
