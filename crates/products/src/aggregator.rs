//! Composite-product salability aggregation.

use stockpool_core::{DomainResult, SalesChannel, Sku};
use stockpool_inventory::{ChannelStockLink, SourceItemQuery, StockSourceLinks, StorefrontConfig};
use stockpool_sales::{BatchEvaluator, SalabilityChain, StockResolver};

use crate::product::{Product, ProductKind, StockStatus};

/// Aggregates child-variant salability onto composite products for the
/// active sales channel.
///
/// Constructed once per storefront context; every decision runs
/// against the stock the channel resolves to.
pub struct CompositeAggregator<L, S, Q, C> {
    channel: SalesChannel,
    resolver: StockResolver<L>,
    chain: SalabilityChain<S, Q>,
    batch: BatchEvaluator<S, Q>,
    storefront: C,
}

impl<L, S, Q, C> CompositeAggregator<L, S, Q, C>
where
    L: ChannelStockLink,
    S: StockSourceLinks,
    Q: SourceItemQuery,
    C: StorefrontConfig,
{
    pub fn new(
        channel: SalesChannel,
        resolver: StockResolver<L>,
        chain: SalabilityChain<S, Q>,
        batch: BatchEvaluator<S, Q>,
        storefront: C,
    ) -> Self {
        Self {
            channel,
            resolver,
            chain,
            batch,
            storefront,
        }
    }

    /// Stock status for a product, considering configurable options.
    ///
    /// Non-configurable products keep the caller-supplied status
    /// untouched. A configurable is in stock as soon as any child SKU
    /// is salable (evaluation order across children is unspecified;
    /// only existence matters) and out of stock when none are or the
    /// child set is empty.
    pub fn assign_status(
        &self,
        product: &Product,
        status: StockStatus,
    ) -> DomainResult<StockStatus> {
        if product.kind() != ProductKind::Configurable {
            return Ok(status);
        }

        let stock_id = self.resolver.resolve(&self.channel)?;
        for sku in product.child_skus() {
            if self.chain.is_salable(&sku, stock_id)? {
                return Ok(StockStatus::InStock);
            }
        }
        Ok(StockStatus::OutOfStock)
    }

    /// Flag unsalable variants and drop them when the storefront hides
    /// out-of-stock products.
    ///
    /// All children are evaluated in one batch call against the
    /// channel's stock. A child missing from the batch result counts
    /// as not salable (fail closed).
    pub fn filter_salable_variants(&self, children: Vec<Product>) -> DomainResult<Vec<Product>> {
        if children.is_empty() {
            return Ok(children);
        }

        let stock_id = self.resolver.resolve(&self.channel)?;
        let skus: Vec<Sku> = children.iter().map(|child| child.sku().clone()).collect();
        let results = self.batch.are_salable(&skus, stock_id)?;

        let show_out_of_stock = self.storefront.show_out_of_stock();
        let total = children.len();
        let mut kept = Vec::with_capacity(total);
        for mut child in children {
            let salable = results
                .get(child.sku())
                .map(|result| result.is_salable())
                .unwrap_or(false);
            if !salable {
                child.mark_not_salable();
                if !show_out_of_stock {
                    continue;
                }
            }
            kept.push(child);
        }
        if kept.len() < total {
            tracing::debug!(
                dropped = total - kept.len(),
                %stock_id,
                "removed unsalable variants from option list"
            );
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use stockpool_core::StockId;
    use stockpool_inventory::{
        InMemoryChannelStockLink, InMemorySourceItemStore, InMemoryStockManagementConfig,
        InMemoryStockSourceLinks, Source, SourceCode, SourceItem, SourceItemStatus,
        StaticStorefrontConfig,
    };
    use stockpool_sales::{ExemptionPolicy, StockSourceProvider};

    use crate::product::OptionAxis;

    fn sku(value: &str) -> Sku {
        Sku::new(value).unwrap()
    }

    fn code(value: &str) -> SourceCode {
        SourceCode::new(value).unwrap()
    }

    type TestAggregator = CompositeAggregator<
        Arc<InMemoryChannelStockLink>,
        Arc<InMemoryStockSourceLinks>,
        Arc<InMemorySourceItemStore>,
        StaticStorefrontConfig,
    >;

    struct Fixture {
        store: Arc<InMemorySourceItemStore>,
        links: Arc<InMemoryStockSourceLinks>,
        channel_link: Arc<InMemoryChannelStockLink>,
        config: Arc<InMemoryStockManagementConfig>,
    }

    impl Fixture {
        fn new() -> Self {
            let fixture = Self {
                store: Arc::new(InMemorySourceItemStore::new()),
                links: Arc::new(InMemoryStockSourceLinks::new()),
                channel_link: Arc::new(InMemoryChannelStockLink::new()),
                config: Arc::new(InMemoryStockManagementConfig::new()),
            };
            fixture.channel_link.assign(
                SalesChannel::website("base").unwrap(),
                StockId::new(1),
            );
            fixture
                .links
                .assign(StockId::new(1), Source::new(code("s1"), true, 1));
            fixture
        }

        fn put_in_stock(&self, value: &str) {
            self.store.upsert(SourceItem::new(
                sku(value),
                code("s1"),
                SourceItemStatus::InStock,
                3.0,
            ));
        }

        fn aggregator(&self, show_out_of_stock: bool) -> TestAggregator {
            let chain = SalabilityChain::new(
                ExemptionPolicy::standard(self.config.clone()),
                StockSourceProvider::new(self.links.clone()),
                self.store.clone(),
            );
            let batch = BatchEvaluator::new(
                ExemptionPolicy::standard(self.config.clone()),
                StockSourceProvider::new(self.links.clone()),
                self.store.clone(),
            );
            CompositeAggregator::new(
                SalesChannel::website("base").unwrap(),
                StockResolver::new(self.channel_link.clone()),
                chain,
                batch,
                StaticStorefrontConfig::new(show_out_of_stock),
            )
        }
    }

    fn configurable(children: &[&str]) -> Product {
        Product::configurable(
            sku("parent"),
            vec![OptionAxis::new(
                "color",
                children.iter().map(|child| sku(child)).collect(),
            )],
        )
    }

    #[test]
    fn simple_products_keep_the_caller_supplied_status() {
        let fixture = Fixture::new();
        let aggregator = fixture.aggregator(true);
        let product = Product::simple(sku("plain"));

        assert_eq!(
            aggregator
                .assign_status(&product, StockStatus::InStock)
                .unwrap(),
            StockStatus::InStock
        );
        assert_eq!(
            aggregator
                .assign_status(&product, StockStatus::OutOfStock)
                .unwrap(),
            StockStatus::OutOfStock
        );
    }

    #[test]
    fn any_salable_child_puts_the_configurable_in_stock() {
        let fixture = Fixture::new();
        fixture.put_in_stock("B");
        let aggregator = fixture.aggregator(true);

        let status = aggregator
            .assign_status(&configurable(&["A", "B"]), StockStatus::OutOfStock)
            .unwrap();
        assert_eq!(status, StockStatus::InStock);
    }

    #[test]
    fn no_salable_children_means_out_of_stock() {
        let fixture = Fixture::new();
        let aggregator = fixture.aggregator(true);

        let status = aggregator
            .assign_status(&configurable(&["A", "B"]), StockStatus::InStock)
            .unwrap();
        assert_eq!(status, StockStatus::OutOfStock);
    }

    #[test]
    fn zero_children_means_out_of_stock() {
        let fixture = Fixture::new();
        let aggregator = fixture.aggregator(true);

        let status = aggregator
            .assign_status(&configurable(&[]), StockStatus::InStock)
            .unwrap();
        assert_eq!(status, StockStatus::OutOfStock);
    }

    #[test]
    fn hiding_out_of_stock_drops_unsalable_variants() {
        let fixture = Fixture::new();
        fixture.put_in_stock("A");
        let aggregator = fixture.aggregator(false);

        let kept = aggregator
            .filter_salable_variants(vec![Product::simple(sku("A")), Product::simple(sku("B"))])
            .unwrap();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].sku(), &sku("A"));
    }

    #[test]
    fn showing_out_of_stock_keeps_variants_but_flags_them() {
        let fixture = Fixture::new();
        fixture.put_in_stock("A");
        let aggregator = fixture.aggregator(true);

        let kept = aggregator
            .filter_salable_variants(vec![Product::simple(sku("A")), Product::simple(sku("B"))])
            .unwrap();

        assert_eq!(kept.len(), 2);
        assert!(kept[0].is_salable());
        assert_eq!(kept[1].sku(), &sku("B"));
        assert!(!kept[1].is_salable());
    }

    #[test]
    fn unassigned_channel_surfaces_not_found() {
        let fixture = Fixture::new();
        let aggregator = {
            let chain = SalabilityChain::new(
                ExemptionPolicy::standard(fixture.config.clone()),
                StockSourceProvider::new(fixture.links.clone()),
                fixture.store.clone(),
            );
            let batch = BatchEvaluator::new(
                ExemptionPolicy::standard(fixture.config.clone()),
                StockSourceProvider::new(fixture.links.clone()),
                fixture.store.clone(),
            );
            CompositeAggregator::new(
                SalesChannel::website("unmapped").unwrap(),
                StockResolver::new(fixture.channel_link.clone()),
                chain,
                batch,
                StaticStorefrontConfig::new(true),
            )
        };

        let err = aggregator
            .assign_status(&configurable(&["A"]), StockStatus::InStock)
            .unwrap_err();
        assert_eq!(err, stockpool_core::DomainError::NotFound);
    }
}
