//! Persistence implementations for file-based storage.

mod environment_repository;
mod file_system;
mod service_repository;

pub use environment_repository::*;
pub use file_system::*;
pub use service_repository::*;

use std::path::Path;

use beacon_application::ports::{FileSystemError, RepositoryError};

use crate::serialization::DocumentFormat;

/// Converts a `FileSystemError` into a `RepositoryError`.
fn to_repository_error(e: FileSystemError) -> RepositoryError {
    match e {
        FileSystemError::NotFound(path) => RepositoryError::NotFound(path),
        FileSystemError::PermissionDenied(path) => RepositoryError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        )),
        FileSystemError::Io(io_err) => RepositoryError::Io(io_err),
    }
}

/// Picks the document format for `path` from its extension.
fn format_for(path: &Path) -> Result<DocumentFormat, RepositoryError> {
    DocumentFormat::from_path(path)
        .ok_or_else(|| RepositoryError::UnsupportedFormat(path.display().to_string()))
}
