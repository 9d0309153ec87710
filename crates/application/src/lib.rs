//! Beacon Application - Interpolation engine, use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (the task environment and repository interfaces)
//! - The `${variable}` resolution engine
//! - Service interpolation and its use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::TaskEnvironment;
pub use use_cases::{
    InterpolateServices, InterpolateServicesInput, InterpolateServicesOutput,
    interpolate_services,
};
pub use variable_resolver::{EnvResolver, ResolutionResult};
