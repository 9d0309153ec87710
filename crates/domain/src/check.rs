//! Health check descriptors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A health check attached to a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckDescriptor {
    /// Check name.
    #[serde(default)]
    pub name: String,

    /// Check type (`http`, `tcp`, `script`, `grpc`).
    #[serde(default, rename = "type")]
    pub check_type: String,

    /// Command run by script checks.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,

    /// Arguments passed to `command`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// HTTP path probed by http checks.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,

    /// Protocol used by http checks (`http` or `https`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub protocol: String,

    /// Label of the port to probe, when different from the service port.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub port_label: String,

    /// Status reported before the first check run.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub initial_status: String,

    /// HTTP method used by http checks.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub method: String,

    /// Service name sent by grpc checks.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub grpc_service: String,

    /// Headers sent by http checks. A header may carry several values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub header: HashMap<String, Vec<String>>,

    /// Interval between runs, in milliseconds.
    #[serde(default)]
    pub interval_ms: u64,

    /// Time after which a run is considered failed, in milliseconds.
    #[serde(default)]
    pub timeout_ms: u64,

    /// Skip TLS verification for https checks.
    #[serde(default)]
    pub tls_skip_verify: bool,
}

impl CheckDescriptor {
    /// Creates a check with the given name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, check_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            check_type: check_type.into(),
            ..Default::default()
        }
    }

    /// Sets the command and its arguments.
    #[must_use]
    pub fn with_command<I, S>(mut self, command: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = command.into();
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the HTTP path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the port label.
    #[must_use]
    pub fn with_port_label(mut self, port_label: impl Into<String>) -> Self {
        self.port_label = port_label.into();
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets a header, replacing any previous values for the same name.
    #[must_use]
    pub fn with_header<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true for checks that execute a command inside the task.
    #[must_use]
    pub fn is_script(&self) -> bool {
        self.check_type == "script"
    }
}
