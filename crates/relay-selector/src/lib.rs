//! Relay Selector - Provider selection for the Relay RPC client
//!
//! This crate picks exactly one backend provider from a point-in-time
//! registry snapshot, immediately before a call is dispatched:
//!
//! - **Filter**: eligibility predicate over one provider and the call
//! - **FilterChain**: short-circuiting AND over an ordered filter list
//! - **Selector**: pluggable selection strategy
//! - **RandomSelector**: the default strategy, uniform over survivors
//!
//! ## What this crate does not do
//!
//! Selection owns no registry state, performs no I/O, and never
//! retries. When every provider is filtered out it fails with
//! [`SelectError::EmptyProviderList`] and the caller decides whether
//! to refresh the provider list, switch strategy, or give up.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod error;
pub mod filter;
pub mod selector;

// Re-exports
pub use error::{Result, SelectError};
pub use filter::{DegradeFilter, Filter, FilterChain, TaggedFilter};
pub use selector::{RandomSelector, SelectOption, Selector};
