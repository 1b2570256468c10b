//! Salability result value object.

use serde::{Deserialize, Serialize};

use stockpool_core::{Sku, StockId, ValueObject};

/// Outcome of one salability evaluation for a (sku, stock) pair.
/// Produced fresh per evaluation (or served from cache) and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalabilityResult {
    sku: Sku,
    stock_id: StockId,
    is_salable: bool,
}

impl SalabilityResult {
    pub fn new(sku: Sku, stock_id: StockId, is_salable: bool) -> Self {
        Self {
            sku,
            stock_id,
            is_salable,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn stock_id(&self) -> StockId {
        self.stock_id
    }

    pub fn is_salable(&self) -> bool {
        self.is_salable
    }
}

impl ValueObject for SalabilityResult {}
