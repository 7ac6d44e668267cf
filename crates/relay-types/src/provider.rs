//! Provider records as published by the registry
//!
//! A Provider is one registered backend instance of a service. Records
//! are owned and mutated by the registry; the selection layer only ever
//! sees point-in-time snapshots of them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Registry identity of a provider (e.g. `tcp@10.0.0.1:8880`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderKey(String);

impl ProviderKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Build the conventional `<network>@<addr>` key
    pub fn from_endpoint(network: &str, addr: &str) -> Self {
        Self(format!("{}@{}", network, addr))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typed provider metadata
///
/// The registry publishes two optional pieces of metadata that the
/// built-in filters consume: a degrade marker and a tag mapping. Both
/// are explicit fields here; no open key/value casting is involved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderMeta {
    /// Degrade marker. Set when the provider has self-reported as
    /// unhealthy or was administratively taken out of rotation.
    pub degraded: bool,

    /// Optional tags published by the provider (e.g. `status=alive`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl ProviderMeta {
    /// Look up a single tag value
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }
}

/// A registered backend instance of a service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Registry identity
    pub key: ProviderKey,

    /// Network kind the provider listens on (e.g. `tcp`)
    pub network: String,

    /// Listen address
    pub addr: String,

    /// Provider metadata consumed by selection filters
    #[serde(default)]
    pub meta: ProviderMeta,
}

impl Provider {
    pub fn new(network: impl Into<String>, addr: impl Into<String>) -> Self {
        let network = network.into();
        let addr = addr.into();
        Self {
            key: ProviderKey::from_endpoint(&network, &addr),
            network,
            addr,
            meta: ProviderMeta::default(),
        }
    }

    pub fn with_key(mut self, key: ProviderKey) -> Self {
        self.key = key;
        self
    }

    pub fn with_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.meta.tags = Some(tags);
        self
    }

    pub fn with_degraded(mut self, degraded: bool) -> Self {
        self.meta.degraded = degraded;
        self
    }
}
