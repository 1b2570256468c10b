//! Source items: the ground-truth per-location stock records.

use serde::{Deserialize, Serialize};

use stockpool_core::{Sku, ValueObject};

use crate::source::SourceCode;

/// Stock status of a source item (wire values 0/1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceItemStatus {
    OutOfStock,
    InStock,
}

impl SourceItemStatus {
    /// Integer representation used by the backing store's schema.
    pub fn as_wire(&self) -> u8 {
        match self {
            SourceItemStatus::OutOfStock => 0,
            SourceItemStatus::InStock => 1,
        }
    }
}

/// One (SKU, source) stock record, owned by the external source-item
/// store.
///
/// `quantity` is part of the record shape but the salability decision
/// is purely status-driven and never consults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceItem {
    pub sku: Sku,
    pub source_code: SourceCode,
    pub status: SourceItemStatus,
    pub quantity: f64,
}

impl SourceItem {
    pub fn new(sku: Sku, source_code: SourceCode, status: SourceItemStatus, quantity: f64) -> Self {
        Self {
            sku,
            source_code,
            status,
            quantity,
        }
    }
}

impl ValueObject for SourceItem {}
