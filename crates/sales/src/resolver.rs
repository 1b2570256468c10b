//! Sales-channel to stock resolution.

use std::collections::HashMap;
use std::sync::RwLock;

use stockpool_core::{DomainError, DomainResult, SalesChannel, StockId};
use stockpool_inventory::ChannelStockLink;

/// Resolves the stock serving a sales channel.
///
/// Lookups are memoized for the resolver's lifetime, negative results
/// included, so a misconfigured channel keeps failing fast without
/// repeated store hits.
#[derive(Debug)]
pub struct StockResolver<L> {
    link: L,
    cache: RwLock<HashMap<SalesChannel, Option<StockId>>>,
}

impl<L> StockResolver<L>
where
    L: ChannelStockLink,
{
    pub fn new(link: L) -> Self {
        Self {
            link,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Stock assigned to the channel.
    ///
    /// A channel with no assigned stock yields [`DomainError::NotFound`];
    /// that is a configuration problem requiring operator correction,
    /// not a transient fault, and is never retried here.
    pub fn resolve(&self, channel: &SalesChannel) -> DomainResult<StockId> {
        if let Some(found) = self.cached(channel) {
            return found.ok_or(DomainError::NotFound);
        }

        let found = self.link.stock_for_channel(channel)?;
        tracing::debug!(
            channel_type = %channel.channel_type(),
            code = channel.code(),
            stock = ?found,
            "resolved sales channel"
        );
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(channel.clone(), found);
        }
        found.ok_or(DomainError::NotFound)
    }

    fn cached(&self, channel: &SalesChannel) -> Option<Option<StockId>> {
        let cache = self.cache.read().ok()?;
        cache.get(channel).copied()
    }
}
