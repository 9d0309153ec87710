//! Repository ports
//!
//! Define how service descriptors and task environments are loaded and stored.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use beacon_domain::{ServiceDescriptor, TaskEnv};

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The file does not exist.
    #[error("Not found: {0}")]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The file extension does not map to a known format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Repository trait for service descriptor files.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Loads the service list stored at `path`.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` if the file doesn't exist, or a
    /// serialization error if it does not hold a service list.
    async fn load(&self, path: &Path) -> Result<Vec<ServiceDescriptor>, RepositoryError>;

    /// Saves a service list to `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    async fn save(
        &self,
        path: &Path,
        services: &[ServiceDescriptor],
    ) -> Result<(), RepositoryError>;
}

/// Repository trait for task environment snapshots.
#[async_trait]
pub trait EnvironmentRepository: Send + Sync {
    /// Loads the task environment stored at `path`.
    ///
    /// # Errors
    /// Returns `RepositoryError::NotFound` if the file doesn't exist.
    async fn load(&self, path: &Path) -> Result<TaskEnv, RepositoryError>;
}
