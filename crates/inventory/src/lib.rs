//! Inventory read model for the salability engine.
//!
//! This crate carries the per-location inventory records (sources and
//! source items) and the read interfaces onto the surrounding
//! infrastructure. The engine only ever reads; ownership of the data
//! stays with the host's stores.

pub mod source;
pub mod source_item;
pub mod store;

pub use source::{Source, SourceCode};
pub use source_item::{SourceItem, SourceItemStatus};
pub use store::{
    ChannelStockLink, InMemoryChannelStockLink, InMemorySourceItemStore,
    InMemoryStockManagementConfig, InMemoryStockSourceLinks, SourceItemQuery,
    StaticStorefrontConfig, StockManagementConfig, StockSourceLinks, StorefrontConfig,
};
