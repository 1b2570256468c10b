//! `stockpool-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod channel;
pub mod error;
pub mod id;
pub mod value_object;

pub use channel::{ChannelType, SalesChannel};
pub use error::{DomainError, DomainResult};
pub use id::{Sku, StockId};
pub use value_object::ValueObject;
