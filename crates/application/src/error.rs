//! Application error types

use beacon_domain::DomainError;
use thiserror::Error;

use crate::ports::RepositoryError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading or saving descriptors failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
