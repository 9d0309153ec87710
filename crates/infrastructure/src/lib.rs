//! Beacon Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod persistence;
pub mod serialization;

pub use persistence::{FileEnvironmentRepository, FileServiceRepository, TokioFileSystem};
pub use serialization::{
    DocumentFormat, SerializationError, decode, from_json, from_json_bytes, from_yaml,
    to_json_stable, to_json_stable_bytes,
};
