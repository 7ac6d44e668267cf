//! Selection strategies
//!
//! A [`Selector`] picks exactly one provider from a registry snapshot.
//! Strategies are stateless from the caller's viewpoint and safe to
//! share across concurrent call sites; any internal state (such as the
//! random source here, or a rotating index in a future round-robin
//! strategy) is guarded by the strategy itself.

use crate::error::{Result, SelectError};
use crate::filter::{Filter, FilterChain};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use relay_types::{CallContext, Provider};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// Per-call selection options: the ordered filters to apply
///
/// Built fresh for each call, typically from client configuration
/// ("filter out degraded providers", "require these tags").
#[derive(Default)]
pub struct SelectOption {
    pub filters: Vec<Arc<dyn Filter>>,
}

impl SelectOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }
}

/// A selection strategy
///
/// Implementations must be safe to call concurrently from an unbounded
/// number of callers, each with its own provider snapshot and options.
/// The returned provider borrows from the snapshot passed in; callers
/// that need to hold it past the snapshot clone it.
pub trait Selector: Send + Sync {
    /// Pick one eligible provider for the call, or fail with
    /// [`SelectError::EmptyProviderList`] when the filters reject
    /// every provider. Never falls back to an ineligible provider and
    /// never retries; fail-over belongs to the caller.
    fn next<'a>(
        &self,
        providers: &'a [Provider],
        ctx: &CallContext,
        opt: &SelectOption,
    ) -> Result<&'a Provider>;
}

/// Uniform random selection among the providers surviving the filters
///
/// The random source is seeded once at construction and reused for the
/// selector's lifetime; a mutex serializes concurrent draws.
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic selector for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for RandomSelector {
    fn next<'a>(
        &self,
        providers: &'a [Provider],
        ctx: &CallContext,
        opt: &SelectOption,
    ) -> Result<&'a Provider> {
        let chain = FilterChain::new(&opt.filters);
        // Filtering preserves snapshot order, so a given snapshot and
        // filter set always yield the same survivor list.
        let survivors: Vec<&'a Provider> = providers
            .iter()
            .filter(|provider| chain.accept(provider, ctx))
            .collect();

        if survivors.is_empty() {
            debug!(
                method = %ctx.service_method,
                providers = providers.len(),
                filters = opt.filters.len(),
                "no eligible provider after filtering"
            );
            return Err(SelectError::EmptyProviderList);
        }

        let index = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(0..survivors.len())
        };
        let chosen = survivors[index];
        trace!(
            method = %ctx.service_method,
            provider = %chosen.key,
            survivors = survivors.len(),
            "provider selected"
        );
        Ok(chosen)
    }
}
