//! Service mesh (connect) descriptors.
//!
//! A connect block either describes a gateway (proxy settings plus an optional
//! ingress configuration entry) or a sidecar service that fronts the parent
//! service.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Service mesh configuration of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectDescriptor {
    /// The service speaks the mesh protocol natively.
    #[serde(default)]
    pub native: bool,

    /// Gateway configuration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<Gateway>,

    /// Sidecar service registered next to the parent service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidecar_service: Option<SidecarService>,
}

impl ConnectDescriptor {
    /// Creates a connect block for a gateway.
    #[must_use]
    pub fn gateway(gateway: Gateway) -> Self {
        Self {
            gateway: Some(gateway),
            ..Default::default()
        }
    }

    /// Creates a connect block for a sidecar service.
    #[must_use]
    pub fn sidecar(sidecar: SidecarService) -> Self {
        Self {
            sidecar_service: Some(sidecar),
            ..Default::default()
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gateway {
    /// Envoy proxy settings of the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<GatewayProxy>,

    /// Ingress configuration entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress: Option<GatewayIngress>,
}

/// Envoy proxy settings of a gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayProxy {
    /// Upstream connect timeout, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_ms: Option<u64>,

    /// Bind to the tagged addresses of the node.
    #[serde(default)]
    pub bind_tagged_addresses: bool,

    /// Additional addresses the gateway listens on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind_addresses: Vec<GatewayBindAddress>,

    /// Do not bind to the default address.
    #[serde(default)]
    pub no_default_bind: bool,

    /// Opaque proxy configuration.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, String>,
}

/// A named address a gateway binds to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayBindAddress {
    /// Name of the binding.
    #[serde(default)]
    pub name: String,

    /// Listen address.
    #[serde(default)]
    pub address: String,

    /// Listen port.
    #[serde(default)]
    pub port: u16,
}

impl GatewayBindAddress {
    /// Creates a bind address.
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            port,
        }
    }
}

/// Ingress gateway configuration entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayIngress {
    /// Serve listeners over TLS.
    #[serde(default)]
    pub tls_enabled: bool,

    /// Listeners exposed by the gateway.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listeners: Vec<IngressListener>,
}

/// A port exposed by an ingress gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressListener {
    /// Listen port.
    #[serde(default)]
    pub port: u16,

    /// Listener protocol (`tcp`, `http`, ...).
    #[serde(default)]
    pub protocol: String,

    /// Services routed through this listener.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<IngressService>,
}

impl IngressListener {
    /// Creates a listener.
    #[must_use]
    pub fn new(port: u16, protocol: impl Into<String>) -> Self {
        Self {
            port,
            protocol: protocol.into(),
            services: Vec::new(),
        }
    }

    /// Appends a routed service.
    #[must_use]
    pub fn with_service(mut self, service: IngressService) -> Self {
        self.services.push(service);
        self
    }
}

/// A service routed through an ingress listener.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressService {
    /// Upstream service name.
    #[serde(default)]
    pub name: String,

    /// Hosts matched for this service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<String>,
}

impl IngressService {
    /// Creates a routed service.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Sidecar service registered next to a parent service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarService {
    /// Port label of the sidecar.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub port: String,

    /// Tags of the sidecar registration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Sidecar proxy settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<SidecarProxy>,
}

/// Settings of the proxy running in a sidecar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarProxy {
    /// Address of the local service the proxy forwards to.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub local_service_address: String,

    /// Port of the local service the proxy forwards to.
    #[serde(default)]
    pub local_service_port: u16,

    /// Upstream services reachable through the proxy.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upstreams: Vec<SidecarUpstream>,

    /// Opaque proxy configuration.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: HashMap<String, String>,
}

/// An upstream reachable through a sidecar proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarUpstream {
    /// Name of the upstream service.
    #[serde(default)]
    pub destination_name: String,

    /// Local port the upstream is exposed on.
    #[serde(default)]
    pub local_bind_port: u16,

    /// Datacenter of the upstream.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub datacenter: String,
}
