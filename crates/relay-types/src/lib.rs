//! Relay Types - Shared data types for the Relay RPC client
//!
//! This crate holds the types exchanged between the provider registry
//! and the selection layer:
//!
//! - **Provider**: a registered backend instance (identity, address, metadata)
//! - **ProviderMeta**: typed provider metadata (degrade marker, tags)
//! - **CallContext**: call-scoped data threaded to selection filters
//!
//! ## Architectural Boundaries
//!
//! - The **registry** owns and mutates provider records
//! - The **selector** consumes point-in-time snapshots of them and never
//!   mutates a record

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod context;
pub mod provider;

// Re-export main types
pub use context::CallContext;
pub use provider::{Provider, ProviderKey, ProviderMeta};
