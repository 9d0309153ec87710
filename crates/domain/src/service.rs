//! Service descriptors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::check::CheckDescriptor;
use crate::connect::ConnectDescriptor;

/// A declarative service registration.
///
/// Descriptors are plain values: `Clone` produces a fully independent deep
/// copy, with fresh storage for every nested list and map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name as registered in the catalog.
    #[serde(default)]
    pub name: String,

    /// Label of the port the service is reachable on.
    #[serde(default)]
    pub port_label: String,

    /// Tags registered with the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Tags registered instead of `tags` while the allocation is a canary.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub canary_tags: Vec<String>,

    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, String>,

    /// Metadata registered while the allocation is a canary.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub canary_meta: HashMap<String, String>,

    /// Health checks attached to the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<CheckDescriptor>,

    /// Service mesh configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect: Option<ConnectDescriptor>,
}

impl ServiceDescriptor {
    /// Creates a service with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the port label.
    #[must_use]
    pub fn with_port_label(mut self, port_label: impl Into<String>) -> Self {
        self.port_label = port_label.into();
        self
    }

    /// Appends a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Appends a canary tag.
    #[must_use]
    pub fn with_canary_tag(mut self, tag: impl Into<String>) -> Self {
        self.canary_tags.push(tag.into());
        self
    }

    /// Inserts a metadata entry.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Inserts a canary metadata entry.
    #[must_use]
    pub fn with_canary_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.canary_meta.insert(key.into(), value.into());
        self
    }

    /// Appends a health check.
    #[must_use]
    pub fn with_check(mut self, check: CheckDescriptor) -> Self {
        self.checks.push(check);
        self
    }

    /// Sets the connect block.
    #[must_use]
    pub fn with_connect(mut self, connect: ConnectDescriptor) -> Self {
        self.connect = Some(connect);
        self
    }

    /// Returns true if the service participates in the service mesh.
    #[must_use]
    pub const fn has_connect(&self) -> bool {
        self.connect.is_some()
    }
}
