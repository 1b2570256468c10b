//! Memoized salability decisions.

use std::collections::HashMap;
use std::sync::RwLock;

use stockpool_core::{Sku, StockId};

/// Request-scoped memo of `(stock, sku)` decisions.
///
/// Entries are only ever added, never updated or evicted, so a
/// decision made once holds for the cache's whole lifetime; later
/// writes to the underlying source items are not reflected until the
/// owner clears or drops the cache. That staleness is an accepted
/// tradeoff on read-heavy storefront paths. A host that outlives a
/// single request must scope the cache per request or call
/// [`SalabilityCache::clear`] at its own boundaries.
#[derive(Debug, Default)]
pub struct SalabilityCache {
    entries: RwLock<HashMap<(StockId, Sku), bool>>,
}

impl SalabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sku: &Sku, stock_id: StockId) -> Option<bool> {
        let entries = self.entries.read().ok()?;
        entries.get(&(stock_id, sku.clone())).copied()
    }

    pub fn insert(&self, sku: Sku, stock_id: StockId, is_salable: bool) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert((stock_id, sku), is_salable);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all memoized decisions (request boundary, explicit reset).
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(value: &str) -> Sku {
        Sku::new(value).unwrap()
    }

    #[test]
    fn stores_decisions_per_stock_and_sku() {
        let cache = SalabilityCache::new();
        cache.insert(sku("A"), StockId::new(1), true);
        cache.insert(sku("A"), StockId::new(2), false);

        assert_eq!(cache.get(&sku("A"), StockId::new(1)), Some(true));
        assert_eq!(cache.get(&sku("A"), StockId::new(2)), Some(false));
        assert_eq!(cache.get(&sku("B"), StockId::new(1)), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_resets_the_scope() {
        let cache = SalabilityCache::new();
        cache.insert(sku("A"), StockId::new(1), true);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&sku("A"), StockId::new(1)), None);
    }
}
