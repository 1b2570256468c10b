//! Priority-ordered enabled sources for a stock.

use stockpool_core::{DomainError, DomainResult, StockId};
use stockpool_inventory::{SourceCode, StockSourceLinks};

/// Provides the enabled sources assigned to a stock, highest priority
/// first.
///
/// The order only affects short-circuit cost; the salability outcome
/// is the same under any permutation.
#[derive(Debug)]
pub struct StockSourceProvider<S> {
    links: S,
}

impl<S> StockSourceProvider<S>
where
    S: StockSourceLinks,
{
    pub fn new(links: S) -> Self {
        Self { links }
    }

    /// Enabled source codes for the stock, priority ascending.
    ///
    /// A stock whose enabled set is empty is a setup problem; it is
    /// surfaced as [`DomainError::Configuration`] rather than quietly
    /// evaluated against no sources.
    pub fn enabled_source_codes(&self, stock_id: StockId) -> DomainResult<Vec<SourceCode>> {
        let mut sources = self.links.assigned_sources(stock_id)?;
        sources.sort_by_key(|source| source.priority);

        let codes: Vec<SourceCode> = sources
            .into_iter()
            .filter(|source| source.enabled)
            .map(|source| source.code)
            .collect();

        if codes.is_empty() {
            return Err(DomainError::configuration(format!(
                "stock {stock_id} has no enabled sources"
            )));
        }
        Ok(codes)
    }
}
