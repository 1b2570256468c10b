//! Catalog products as the storefront read path sees them.

use serde::{Deserialize, Serialize};

use stockpool_core::Sku;

/// Purchasable shape of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Simple,
    /// Resolves to one of several child-variant SKUs at purchase time.
    Configurable,
}

/// Storefront stock status (wire values 0/1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    InStock,
}

impl StockStatus {
    pub fn as_wire(&self) -> u8 {
        match self {
            StockStatus::OutOfStock => 0,
            StockStatus::InStock => 1,
        }
    }
}

/// One configurable option axis (e.g. color) and the variant SKUs
/// behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionAxis {
    pub attribute: String,
    pub variant_skus: Vec<Sku>,
}

impl OptionAxis {
    pub fn new(attribute: impl Into<String>, variant_skus: Vec<Sku>) -> Self {
        Self {
            attribute: attribute.into(),
            variant_skus,
        }
    }
}

/// A catalog product with its in-memory salable flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    sku: Sku,
    kind: ProductKind,
    salable: bool,
    option_axes: Vec<OptionAxis>,
}

impl Product {
    pub fn simple(sku: Sku) -> Self {
        Self {
            sku,
            kind: ProductKind::Simple,
            salable: true,
            option_axes: Vec::new(),
        }
    }

    pub fn configurable(sku: Sku, option_axes: Vec<OptionAxis>) -> Self {
        Self {
            sku,
            kind: ProductKind::Configurable,
            salable: true,
            option_axes,
        }
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn is_salable(&self) -> bool {
        self.salable
    }

    pub fn mark_not_salable(&mut self) {
        self.salable = false;
    }

    pub fn option_axes(&self) -> &[OptionAxis] {
        &self.option_axes
    }

    /// Distinct child SKUs across all option axes, first-seen order.
    pub fn child_skus(&self) -> Vec<Sku> {
        let mut seen: Vec<Sku> = Vec::new();
        for axis in &self.option_axes {
            for sku in &axis.variant_skus {
                if !seen.contains(sku) {
                    seen.push(sku.clone());
                }
            }
        }
        seen
    }
}
