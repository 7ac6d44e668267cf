//! Eligibility filters and filter-chain composition
//!
//! A filter is a pure predicate over one provider and the call about
//! to be dispatched. Filters are stateless, must not mutate their
//! inputs, and compose through [`FilterChain`] as a logical AND.

use relay_types::{CallContext, Provider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Eligibility predicate evaluated per provider, per call
pub trait Filter: Send + Sync {
    /// Filter name, used in selection trace events
    fn name(&self) -> &'static str;

    /// Whether `provider` is eligible for this call
    fn accept(&self, provider: &Provider, ctx: &CallContext) -> bool;
}

/// Ordered filter list combined into a single predicate
///
/// Evaluation is a logical AND that short-circuits on the first
/// rejecting filter. An empty chain accepts every provider.
pub struct FilterChain<'a> {
    filters: &'a [Arc<dyn Filter>],
}

impl<'a> FilterChain<'a> {
    pub fn new(filters: &'a [Arc<dyn Filter>]) -> Self {
        Self { filters }
    }

    pub fn accept(&self, provider: &Provider, ctx: &CallContext) -> bool {
        self.filters.iter().all(|filter| {
            let accepted = filter.accept(provider, ctx);
            if !accepted {
                trace!(
                    filter = filter.name(),
                    provider = %provider.key,
                    "provider rejected"
                );
            }
            accepted
        })
    }
}

/// Excludes providers carrying the degrade marker
///
/// Providers mark themselves degraded when heartbeats fail upstream or
/// when an operator takes them out of rotation; the marker value is
/// irrelevant, presence alone excludes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DegradeFilter;

impl Filter for DegradeFilter {
    fn name(&self) -> &'static str {
        "degrade"
    }

    fn accept(&self, provider: &Provider, _ctx: &CallContext) -> bool {
        !provider.meta.degraded
    }
}

/// Requires an exact match on a set of provider tags
///
/// With no required tags the filter accepts everything. Otherwise every
/// required key must be present on the provider with exactly the
/// required value; a missing key and a differing value reject alike.
/// Extra provider tags beyond the required set are permitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaggedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<HashMap<String, String>>,
}

impl TaggedFilter {
    pub fn new(required: HashMap<String, String>) -> Self {
        Self {
            required: Some(required),
        }
    }

    /// A tag filter with no constraint; accepts every provider
    pub fn unconstrained() -> Self {
        Self { required: None }
    }
}

impl Filter for TaggedFilter {
    fn name(&self) -> &'static str {
        "tagged"
    }

    fn accept(&self, provider: &Provider, _ctx: &CallContext) -> bool {
        let required = match &self.required {
            Some(required) if !required.is_empty() => required,
            _ => return true,
        };
        let tags = match &provider.meta.tags {
            Some(tags) => tags,
            None => return false,
        };
        required
            .iter()
            .all(|(key, value)| tags.get(key) == Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn ctx() -> CallContext {
        CallContext::new("Arith.Add")
    }

    #[test]
    fn test_degrade_filter() {
        let filter = DegradeFilter;
        let healthy = Provider::new("tcp", ":8880");
        let degraded = Provider::new("tcp", ":8881").with_degraded(true);

        assert!(filter.accept(&healthy, &ctx()));
        assert!(!filter.accept(&degraded, &ctx()));
    }

    #[test]
    fn test_tagged_filter_unconstrained_accepts_all() {
        let no_tags = Provider::new("tcp", ":8880");
        let with_tags = Provider::new("tcp", ":8881").with_tags(tags(&[("region", "eu")]));

        for filter in [TaggedFilter::unconstrained(), TaggedFilter::new(tags(&[]))] {
            assert!(filter.accept(&no_tags, &ctx()));
            assert!(filter.accept(&with_tags, &ctx()));
        }
    }

    #[test]
    fn test_tagged_filter_exact_match() {
        let filter = TaggedFilter::new(tags(&[("region", "us")]));

        let us = Provider::new("tcp", ":8880").with_tags(tags(&[("region", "us")]));
        let us_zoned =
            Provider::new("tcp", ":8881").with_tags(tags(&[("region", "us"), ("zone", "a")]));
        let eu = Provider::new("tcp", ":8882").with_tags(tags(&[("region", "eu")]));
        let untagged = Provider::new("tcp", ":8883");

        assert!(filter.accept(&us, &ctx()));
        // Extra provider tags beyond the required set are fine
        assert!(filter.accept(&us_zoned, &ctx()));
        assert!(!filter.accept(&eu, &ctx()));
        assert!(!filter.accept(&untagged, &ctx()));
    }

    #[test]
    fn test_tagged_filter_missing_key_rejects_like_mismatch() {
        let filter = TaggedFilter::new(tags(&[("region", "us"), ("zone", "a")]));

        let missing_zone = Provider::new("tcp", ":8880").with_tags(tags(&[("region", "us")]));
        let wrong_zone =
            Provider::new("tcp", ":8881").with_tags(tags(&[("region", "us"), ("zone", "b")]));

        assert!(!filter.accept(&missing_zone, &ctx()));
        assert!(!filter.accept(&wrong_zone, &ctx()));
    }

    #[test]
    fn test_empty_chain_accepts_all() {
        let chain = FilterChain::new(&[]);
        let degraded = Provider::new("tcp", ":8880").with_degraded(true);
        assert!(chain.accept(&degraded, &ctx()));
    }

    #[test]
    fn test_chain_is_conjunctive() {
        let filters: Vec<Arc<dyn Filter>> = vec![
            Arc::new(DegradeFilter),
            Arc::new(TaggedFilter::new(tags(&[("status", "alive")]))),
        ];
        let chain = FilterChain::new(&filters);

        let alive = Provider::new("tcp", ":8880").with_tags(tags(&[("status", "alive")]));
        let alive_degraded = Provider::new("tcp", ":8881")
            .with_tags(tags(&[("status", "alive")]))
            .with_degraded(true);
        let starting = Provider::new("tcp", ":8882").with_tags(tags(&[("status", "starting")]));

        assert!(chain.accept(&alive, &ctx()));
        assert!(!chain.accept(&alive_degraded, &ctx()));
        assert!(!chain.accept(&starting, &ctx()));
    }
}
