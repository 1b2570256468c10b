//! `stockpool-sales` — the salability-resolution engine.
//!
//! Decides whether a SKU can currently be sold against a stock by
//! consulting the stock's prioritized sources, applying per-SKU
//! management-exemption rules, and memoizing decisions so repeated
//! lookups within one request stay cheap and consistent.

pub mod batch;
pub mod cache;
pub mod chain;
pub mod condition;
pub mod resolver;
pub mod result;
pub mod sources;

pub use batch::BatchEvaluator;
pub use cache::SalabilityCache;
pub use chain::SalabilityChain;
pub use condition::{ExemptionPolicy, ManageStockDisabled, SalabilityCondition, UnmanagedSku};
pub use resolver::StockResolver;
pub use result::SalabilityResult;
pub use sources::StockSourceProvider;
