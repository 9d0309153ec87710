//! File-based service descriptor repository.
//!
//! Reads service lists from JSON or YAML files and writes them back as
//! deterministic JSON.

use std::path::Path;

use async_trait::async_trait;
use beacon_application::ports::{FileSystem, RepositoryError, ServiceRepository};
use beacon_domain::ServiceDescriptor;
use tracing::debug;

use super::{format_for, to_repository_error};
use crate::serialization::{decode, to_json_stable_bytes};

/// File-based service descriptor repository.
#[derive(Debug, Clone)]
pub struct FileServiceRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileServiceRepository<F> {
    /// Creates a new file-based service repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> ServiceRepository for FileServiceRepository<F> {
    async fn load(&self, path: &Path) -> Result<Vec<ServiceDescriptor>, RepositoryError> {
        let format = format_for(path)?;

        let content = self
            .fs
            .read_file(path)
            .await
            .map_err(to_repository_error)?;

        let services: Vec<ServiceDescriptor> = decode(format, &content)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        debug!(path = %path.display(), count = services.len(), "loaded services");
        Ok(services)
    }

    async fn save(
        &self,
        path: &Path,
        services: &[ServiceDescriptor],
    ) -> Result<(), RepositoryError> {
        let content = to_json_stable_bytes(&services)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        self.fs
            .write_file(path, &content)
            .await
            .map_err(to_repository_error)?;

        debug!(path = %path.display(), count = services.len(), "saved services");
        Ok(())
    }
}
