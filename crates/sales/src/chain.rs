//! Single-SKU salability decision chain.

use stockpool_core::{DomainResult, Sku, StockId};
use stockpool_inventory::{SourceItemQuery, SourceItemStatus, StockSourceLinks};

use crate::cache::SalabilityCache;
use crate::condition::ExemptionPolicy;
use crate::sources::StockSourceProvider;

/// Decides whether one SKU is salable against one stock.
///
/// Exemption conditions run first; only non-exempt SKUs reach the
/// source-item store, where any enabled assigned source with an
/// in-stock record makes the SKU salable. No record anywhere means
/// not salable (fail closed).
///
/// Decisions are memoized in a [`SalabilityCache`] for the chain's
/// lifetime; a (sku, stock) pair is evaluated at most once per cache
/// scope, even if the underlying data changes later.
#[derive(Debug)]
pub struct SalabilityChain<S, Q> {
    exemptions: ExemptionPolicy,
    sources: StockSourceProvider<S>,
    items: Q,
    cache: SalabilityCache,
}

impl<S, Q> SalabilityChain<S, Q>
where
    S: StockSourceLinks,
    Q: SourceItemQuery,
{
    pub fn new(exemptions: ExemptionPolicy, sources: StockSourceProvider<S>, items: Q) -> Self {
        Self::with_cache(exemptions, sources, items, SalabilityCache::new())
    }

    /// Construct with a caller-owned cache, letting the host decide
    /// the memoization scope (typically one cache per request).
    pub fn with_cache(
        exemptions: ExemptionPolicy,
        sources: StockSourceProvider<S>,
        items: Q,
        cache: SalabilityCache,
    ) -> Self {
        Self {
            exemptions,
            sources,
            items,
            cache,
        }
    }

    /// Memoized salability decision for `(sku, stock_id)`.
    pub fn is_salable(&self, sku: &Sku, stock_id: StockId) -> DomainResult<bool> {
        if let Some(hit) = self.cache.get(sku, stock_id) {
            return Ok(hit);
        }

        let decision = self.decide(sku, stock_id)?;
        self.cache.insert(sku.clone(), stock_id, decision);
        Ok(decision)
    }

    /// The memoization scope backing this chain.
    pub fn cache(&self) -> &SalabilityCache {
        &self.cache
    }

    fn decide(&self, sku: &Sku, stock_id: StockId) -> DomainResult<bool> {
        if self.exemptions.is_exempt(sku, stock_id)? {
            tracing::debug!(%sku, %stock_id, "sku exempt from source-level stock checks");
            return Ok(true);
        }

        let source_codes = self.sources.enabled_source_codes(stock_id)?;
        let rows = self.items.query(
            core::slice::from_ref(sku),
            &source_codes,
            SourceItemStatus::InStock,
        )?;
        Ok(!rows.is_empty())
    }
}
