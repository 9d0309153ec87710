//! Resolved variable types

use serde::{Deserialize, Serialize};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VariableSource {
    /// Node attributes and metadata - lowest precedence
    Node = 0,
    /// Variables of the task environment - highest precedence
    Env = 1,
}

impl VariableSource {
    /// Returns the precedence level (higher = takes priority).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        *self as u8
    }

    /// Returns a human-readable name for the source.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Env => "Env",
        }
    }
}

/// A resolved variable with its value and origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    /// The variable name (without `${ }`).
    pub name: String,
    /// The resolved value.
    pub value: String,
    /// The map the value was found in.
    pub source: VariableSource,
}

impl ResolvedVariable {
    /// Creates a new resolved variable.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, source: VariableSource) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            source,
        }
    }
}
