//! Call-scoped context threaded through selection
//!
//! A CallContext describes the call about to be dispatched so filters
//! can consult it. It is not a cancellation token and carries no
//! deadline; selection never blocks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Call-scoped data available to selection filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallContext {
    /// Fully-qualified service method (e.g. `Arith.Add`)
    pub service_method: String,

    /// Call arguments, when the caller chooses to expose them to filters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,

    /// Free-form call attributes (caller identity, routing hints, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
}

impl CallContext {
    pub fn new(service_method: impl Into<String>) -> Self {
        Self {
            service_method: service_method.into(),
            args: None,
            attributes: HashMap::new(),
        }
    }

    pub fn with_args(mut self, args: serde_json::Value) -> Self {
        self.args = Some(args);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up a single call attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
