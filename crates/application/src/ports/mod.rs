//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod environment;
mod file_system;
mod repository;

pub use environment::TaskEnvironment;
pub use file_system::{FileSystem, FileSystemError};
pub use repository::{EnvironmentRepository, RepositoryError, ServiceRepository};
