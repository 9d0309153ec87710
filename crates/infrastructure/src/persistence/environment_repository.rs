//! File-based task environment repository.
//!
//! An environment file holds two maps:
//! ```text
//! env:
//!   NOMAD_PORT_http: "8080"
//! node_attrs:
//!   attr.kernel.name: linux
//! ```

use std::path::Path;

use async_trait::async_trait;
use beacon_application::ports::{EnvironmentRepository, FileSystem, RepositoryError};
use beacon_domain::TaskEnv;
use tracing::debug;

use super::{format_for, to_repository_error};
use crate::serialization::decode;

/// File-based environment repository.
#[derive(Debug, Clone)]
pub struct FileEnvironmentRepository<F> {
    fs: F,
}

impl<F: FileSystem> FileEnvironmentRepository<F> {
    /// Creates a new file-based environment repository.
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl<F: FileSystem + Sync> EnvironmentRepository for FileEnvironmentRepository<F> {
    async fn load(&self, path: &Path) -> Result<TaskEnv, RepositoryError> {
        let format = format_for(path)?;

        if !self.fs.exists(path).await {
            return Err(RepositoryError::NotFound(path.to_path_buf()));
        }

        let content = self
            .fs
            .read_file(path)
            .await
            .map_err(to_repository_error)?;

        let env: TaskEnv = decode(format, &content)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        debug!(path = %path.display(), variables = env.len(), "loaded task environment");
        Ok(env)
    }
}
