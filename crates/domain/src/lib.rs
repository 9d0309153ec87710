//! Beacon Domain - Service descriptor types
//!
//! This crate defines the declarative service descriptors that get registered
//! with a service catalog, plus the per-task environment they are interpolated
//! against. All types here are pure Rust with no I/O dependencies.

pub mod check;
pub mod connect;
pub mod environment;
pub mod error;
pub mod service;

pub use check::CheckDescriptor;
pub use connect::{
    ConnectDescriptor, Gateway, GatewayBindAddress, GatewayIngress, GatewayProxy,
    IngressListener, IngressService, SidecarProxy, SidecarService, SidecarUpstream,
};
pub use environment::{ResolvedVariable, TaskEnv, TaskEnvBuilder, VariableSource};
pub use error::{DomainError, DomainResult};
pub use service::ServiceDescriptor;
