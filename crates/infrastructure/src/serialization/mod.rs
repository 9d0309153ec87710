//! Serialization for descriptor and environment files.
//!
//! JSON and YAML are accepted on input. Output is deterministic JSON:
//! - Object keys sorted alphabetically
//! - 2-space indentation
//! - Trailing newline

mod format;
mod json;

pub use format::*;
pub use json::*;
