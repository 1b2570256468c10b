//! Read interfaces onto the surrounding inventory infrastructure.
//!
//! The salability engine consumes these four stores and never writes
//! through them. Implementations belong to the host's data-access
//! layer; the `InMemory*` variants here back tests and development
//! wiring.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use stockpool_core::{DomainError, DomainResult, SalesChannel, Sku, StockId};

use crate::source::{Source, SourceCode};
use crate::source_item::{SourceItem, SourceItemStatus};

/// Channel-to-stock mapping store.
pub trait ChannelStockLink: Send + Sync {
    /// Stock serving the given channel, if one is assigned.
    fn stock_for_channel(&self, channel: &SalesChannel) -> DomainResult<Option<StockId>>;
}

/// Stock-to-source assignment store.
pub trait StockSourceLinks: Send + Sync {
    /// Sources assigned to the stock. Returned order is unspecified;
    /// the priority lives in the record.
    fn assigned_sources(&self, stock_id: StockId) -> DomainResult<Vec<Source>>;
}

/// Bulk filtered read against the source-item store.
pub trait SourceItemQuery: Send + Sync {
    /// Rows matching `sku ∈ skus` AND `source_code ∈ source_codes`
    /// AND exact `status`.
    fn query(
        &self,
        skus: &[Sku],
        source_codes: &[SourceCode],
        status: SourceItemStatus,
    ) -> DomainResult<Vec<SourceItem>>;
}

/// Per-SKU inventory-management configuration.
pub trait StockManagementConfig: Send + Sync {
    /// Whether the SKU is flagged for per-source inventory management.
    fn is_managed_for_sku(&self, sku: &Sku) -> DomainResult<bool>;

    /// Legacy "manage stock" switch for the SKU on the given stock.
    fn is_manage_stock_enabled(&self, sku: &Sku, stock_id: StockId) -> DomainResult<bool>;
}

/// Storefront display configuration.
pub trait StorefrontConfig: Send + Sync {
    /// Whether out-of-stock variants remain visible on product pages.
    fn show_out_of_stock(&self) -> bool;
}

impl<S> ChannelStockLink for Arc<S>
where
    S: ChannelStockLink + ?Sized,
{
    fn stock_for_channel(&self, channel: &SalesChannel) -> DomainResult<Option<StockId>> {
        (**self).stock_for_channel(channel)
    }
}

impl<S> StockSourceLinks for Arc<S>
where
    S: StockSourceLinks + ?Sized,
{
    fn assigned_sources(&self, stock_id: StockId) -> DomainResult<Vec<Source>> {
        (**self).assigned_sources(stock_id)
    }
}

impl<S> SourceItemQuery for Arc<S>
where
    S: SourceItemQuery + ?Sized,
{
    fn query(
        &self,
        skus: &[Sku],
        source_codes: &[SourceCode],
        status: SourceItemStatus,
    ) -> DomainResult<Vec<SourceItem>> {
        (**self).query(skus, source_codes, status)
    }
}

impl<S> StockManagementConfig for Arc<S>
where
    S: StockManagementConfig + ?Sized,
{
    fn is_managed_for_sku(&self, sku: &Sku) -> DomainResult<bool> {
        (**self).is_managed_for_sku(sku)
    }

    fn is_manage_stock_enabled(&self, sku: &Sku, stock_id: StockId) -> DomainResult<bool> {
        (**self).is_manage_stock_enabled(sku, stock_id)
    }
}

impl<S> StorefrontConfig for Arc<S>
where
    S: StorefrontConfig + ?Sized,
{
    fn show_out_of_stock(&self) -> bool {
        (**self).show_out_of_stock()
    }
}

fn poisoned(store: &str) -> DomainError {
    DomainError::data_store(format!("{store} lock poisoned"))
}

/// In-memory channel mapping for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryChannelStockLink {
    links: RwLock<HashMap<SalesChannel, StockId>>,
}

impl InMemoryChannelStockLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&self, channel: SalesChannel, stock_id: StockId) {
        if let Ok(mut links) = self.links.write() {
            links.insert(channel, stock_id);
        }
    }
}

impl ChannelStockLink for InMemoryChannelStockLink {
    fn stock_for_channel(&self, channel: &SalesChannel) -> DomainResult<Option<StockId>> {
        let links = self.links.read().map_err(|_| poisoned("channel link"))?;
        Ok(links.get(channel).copied())
    }
}

/// In-memory stock-to-source assignments for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStockSourceLinks {
    assignments: RwLock<HashMap<StockId, Vec<Source>>>,
}

impl InMemoryStockSourceLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&self, stock_id: StockId, source: Source) {
        if let Ok(mut assignments) = self.assignments.write() {
            assignments.entry(stock_id).or_default().push(source);
        }
    }
}

impl StockSourceLinks for InMemoryStockSourceLinks {
    fn assigned_sources(&self, stock_id: StockId) -> DomainResult<Vec<Source>> {
        let assignments = self
            .assignments
            .read()
            .map_err(|_| poisoned("source assignment"))?;
        Ok(assignments.get(&stock_id).cloned().unwrap_or_default())
    }
}

/// In-memory source-item store for tests/dev, keyed (sku, source).
#[derive(Debug, Default)]
pub struct InMemorySourceItemStore {
    items: RwLock<HashMap<(Sku, SourceCode), SourceItem>>,
}

impl InMemorySourceItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for the item's (sku, source) pair.
    pub fn upsert(&self, item: SourceItem) {
        if let Ok(mut items) = self.items.write() {
            items.insert((item.sku.clone(), item.source_code.clone()), item);
        }
    }
}

impl SourceItemQuery for InMemorySourceItemStore {
    fn query(
        &self,
        skus: &[Sku],
        source_codes: &[SourceCode],
        status: SourceItemStatus,
    ) -> DomainResult<Vec<SourceItem>> {
        let items = self.items.read().map_err(|_| poisoned("source item"))?;
        Ok(items
            .values()
            .filter(|item| {
                item.status == status
                    && skus.contains(&item.sku)
                    && source_codes.contains(&item.source_code)
            })
            .cloned()
            .collect())
    }
}

/// In-memory management configuration for tests/dev.
///
/// Every SKU is managed and has manage-stock enabled until flagged
/// otherwise.
#[derive(Debug, Default)]
pub struct InMemoryStockManagementConfig {
    unmanaged: RwLock<HashSet<Sku>>,
    manage_stock_disabled: RwLock<HashSet<(Sku, StockId)>>,
}

impl InMemoryStockManagementConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the SKU out of per-source inventory management.
    pub fn set_unmanaged(&self, sku: Sku) {
        if let Ok(mut unmanaged) = self.unmanaged.write() {
            unmanaged.insert(sku);
        }
    }

    /// Turn the legacy manage-stock switch off for a SKU on a stock.
    pub fn disable_manage_stock(&self, sku: Sku, stock_id: StockId) {
        if let Ok(mut disabled) = self.manage_stock_disabled.write() {
            disabled.insert((sku, stock_id));
        }
    }
}

impl StockManagementConfig for InMemoryStockManagementConfig {
    fn is_managed_for_sku(&self, sku: &Sku) -> DomainResult<bool> {
        let unmanaged = self
            .unmanaged
            .read()
            .map_err(|_| poisoned("management config"))?;
        Ok(!unmanaged.contains(sku))
    }

    fn is_manage_stock_enabled(&self, sku: &Sku, stock_id: StockId) -> DomainResult<bool> {
        let disabled = self
            .manage_stock_disabled
            .read()
            .map_err(|_| poisoned("management config"))?;
        Ok(!disabled.contains(&(sku.clone(), stock_id)))
    }
}

/// Fixed storefront configuration.
#[derive(Debug, Copy, Clone)]
pub struct StaticStorefrontConfig {
    show_out_of_stock: bool,
}

impl StaticStorefrontConfig {
    pub fn new(show_out_of_stock: bool) -> Self {
        Self { show_out_of_stock }
    }
}

impl StorefrontConfig for StaticStorefrontConfig {
    fn show_out_of_stock(&self) -> bool {
        self.show_out_of_stock
    }
}
