//! `stockpool-products` — composite-product salability aggregation.
//!
//! A configurable product is salable exactly when any of its child
//! variants is. This crate assigns that aggregated status and filters
//! unsalable variants off storefront option lists.

pub mod aggregator;
pub mod product;

pub use aggregator::CompositeAggregator;
pub use product::{OptionAxis, Product, ProductKind, StockStatus};
