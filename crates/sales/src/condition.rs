//! Salability conditions and the management-exemption policy.

use stockpool_core::{DomainResult, Sku, StockId};
use stockpool_inventory::StockManagementConfig;

/// One link of the salability decision.
///
/// `Some(decision)` ends the evaluation with that decision;
/// `None` defers to the next condition in the list.
pub trait SalabilityCondition: Send + Sync {
    fn evaluate(&self, sku: &Sku, stock_id: StockId) -> DomainResult<Option<bool>>;
}

/// Exempt when the legacy manage-stock switch is off for the SKU on
/// this stock.
#[derive(Debug)]
pub struct ManageStockDisabled<C> {
    config: C,
}

impl<C> ManageStockDisabled<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C> SalabilityCondition for ManageStockDisabled<C>
where
    C: StockManagementConfig,
{
    fn evaluate(&self, sku: &Sku, stock_id: StockId) -> DomainResult<Option<bool>> {
        let enabled = self.config.is_manage_stock_enabled(sku, stock_id)?;
        Ok(if enabled { None } else { Some(true) })
    }
}

/// Exempt when the SKU is not under per-source inventory management.
#[derive(Debug)]
pub struct UnmanagedSku<C> {
    config: C,
}

impl<C> UnmanagedSku<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

impl<C> SalabilityCondition for UnmanagedSku<C>
where
    C: StockManagementConfig,
{
    fn evaluate(&self, sku: &Sku, stock_id: StockId) -> DomainResult<Option<bool>> {
        let managed = self.config.is_managed_for_sku(sku)?;
        Ok(if managed { None } else { Some(true) })
    }
}

/// Ordered exemption predicates.
///
/// Either condition firing alone makes the SKU salable and skips the
/// source-item query entirely. Pure predicate, no side effects.
pub struct ExemptionPolicy {
    conditions: Vec<Box<dyn SalabilityCondition>>,
}

impl ExemptionPolicy {
    /// Standard precedence: the manage-stock switch first, then the
    /// per-source management flag.
    pub fn standard<C>(config: C) -> Self
    where
        C: StockManagementConfig + Clone + 'static,
    {
        Self::from_conditions(vec![
            Box::new(ManageStockDisabled::new(config.clone())),
            Box::new(UnmanagedSku::new(config)),
        ])
    }

    pub fn from_conditions(conditions: Vec<Box<dyn SalabilityCondition>>) -> Self {
        Self { conditions }
    }

    /// Whether the SKU/stock pair is exempt from source-level checks.
    /// The first condition to decide wins.
    pub fn is_exempt(&self, sku: &Sku, stock_id: StockId) -> DomainResult<bool> {
        for condition in &self.conditions {
            if let Some(decision) = condition.evaluate(sku, stock_id)? {
                return Ok(decision);
            }
        }
        Ok(false)
    }
}

impl core::fmt::Debug for ExemptionPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExemptionPolicy")
            .field("conditions", &self.conditions.len())
            .finish()
    }
}
