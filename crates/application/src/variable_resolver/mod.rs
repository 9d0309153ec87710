//! Variable resolution module
//!
//! Provides parsing and resolution of `${variable}` syntax in strings.
//!
//! # Usage
//!
//! ```
//! use beacon_application::variable_resolver::EnvResolver;
//! use beacon_application::TaskEnvironment;
//! use beacon_domain::TaskEnv;
//!
//! let env = TaskEnv::builder().set_env("NOMAD_PORT_http", "8080").build();
//! let resolver = EnvResolver::new(env);
//!
//! assert_eq!(resolver.replace_env("port=${NOMAD_PORT_http}"), "port=8080");
//! assert_eq!(resolver.replace_env("${unknown}"), "${unknown}");
//! ```

pub mod engine;
pub mod parser;

pub use engine::{EnvResolver, ResolutionResult};
pub use parser::{VariableReference, extract_variable_names, has_variables, parse_variables};
