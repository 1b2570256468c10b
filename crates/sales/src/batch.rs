//! Batch salability evaluation.

use std::collections::HashMap;

use stockpool_core::{DomainResult, Sku, StockId};
use stockpool_inventory::{SourceItemQuery, SourceItemStatus, StockSourceLinks};

use crate::condition::ExemptionPolicy;
use crate::result::SalabilityResult;
use crate::sources::StockSourceProvider;

/// Evaluates salability for many SKUs against one stock.
///
/// Exempt SKUs are settled per-SKU without touching the store; the
/// non-exempt remainder is answered by a single filtered query (the
/// stock's enabled sources are resolved once and shared across the
/// whole batch). SKUs absent from the query result are not salable.
///
/// Every distinct input SKU appears exactly once in the output;
/// duplicates collapse. No memoization happens at this layer.
#[derive(Debug)]
pub struct BatchEvaluator<S, Q> {
    exemptions: ExemptionPolicy,
    sources: StockSourceProvider<S>,
    items: Q,
}

impl<S, Q> BatchEvaluator<S, Q>
where
    S: StockSourceLinks,
    Q: SourceItemQuery,
{
    pub fn new(exemptions: ExemptionPolicy, sources: StockSourceProvider<S>, items: Q) -> Self {
        Self {
            exemptions,
            sources,
            items,
        }
    }

    /// One [`SalabilityResult`] per distinct input SKU.
    pub fn are_salable(
        &self,
        skus: &[Sku],
        stock_id: StockId,
    ) -> DomainResult<HashMap<Sku, SalabilityResult>> {
        let mut results = HashMap::new();
        let mut remaining: Vec<Sku> = Vec::new();

        for sku in skus {
            if results.contains_key(sku) || remaining.iter().any(|seen| seen == sku) {
                continue;
            }
            if self.exemptions.is_exempt(sku, stock_id)? {
                results.insert(
                    sku.clone(),
                    SalabilityResult::new(sku.clone(), stock_id, true),
                );
            } else {
                remaining.push(sku.clone());
            }
        }

        if !remaining.is_empty() {
            let source_codes = self.sources.enabled_source_codes(stock_id)?;
            tracing::debug!(
                skus = remaining.len(),
                sources = source_codes.len(),
                %stock_id,
                "issuing batch source-item query"
            );
            let rows = self
                .items
                .query(&remaining, &source_codes, SourceItemStatus::InStock)?;

            for row in rows {
                let is_salable = row.status == SourceItemStatus::InStock;
                results.insert(
                    row.sku.clone(),
                    SalabilityResult::new(row.sku, stock_id, is_salable),
                );
            }
            for sku in remaining {
                results
                    .entry(sku.clone())
                    .or_insert_with(|| SalabilityResult::new(sku, stock_id, false));
            }
        }

        Ok(results)
    }
}
