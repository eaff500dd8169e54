//! Fan-out / fan-in over the three source gateways.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use storefront_catalog::{MergedRecord, Parameters};
use storefront_core::{LookupResult, PageResult, Source};

use crate::fallback::{FallbackPolicy, PolicyTable, Resolved};
use crate::gateway;
use crate::observer::SettlementObserver;
use crate::store::Stores;

/// Runs the product, variants and coupon lookups concurrently and merges them.
///
/// ## Semantics
///
/// - All three lookups start together and all three are awaited to settlement. A
///   failing lookup never cancels its siblings.
/// - Each settled outcome goes through its source's [`FallbackPolicy`].
/// - Fatal failures are reported by fixed source priority (product, then
///   variants), never by completion order.
pub struct Aggregator {
    stores: Stores,
    policies: PolicyTable,
    observer: Option<Arc<dyn SettlementObserver>>,
}

impl Aggregator {
    pub fn new(stores: Stores) -> Self {
        Self {
            stores,
            policies: PolicyTable::STANDARD,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SettlementObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub async fn aggregate(&self, params: &Parameters) -> PageResult<MergedRecord> {
        let (product, variants, coupon) = tokio::join!(
            self.settle(
                Source::Product,
                self.policies.product,
                gateway::fetch_product(&*self.stores.products, params.product_id()),
            ),
            self.settle(
                Source::Variants,
                self.policies.variants,
                gateway::fetch_variants(&*self.stores.variants, params.product_id()),
            ),
            self.settle(
                Source::Coupon,
                self.policies.coupon,
                gateway::fetch_coupon(&*self.stores.coupons, params.coupon_code()),
            ),
        );

        // Priority order. `?` here runs only after every lookup has settled.
        let product = product.into_result()?;
        let variants = variants.into_result()?;
        let coupon = coupon.into_result()?;

        debug!(
            product_id = %product.id,
            variants = variants.len(),
            coupon = %coupon.code,
            "sources merged"
        );

        Ok(MergedRecord {
            product,
            variants,
            coupon,
        })
    }

    async fn settle<T>(
        &self,
        source: Source,
        policy: FallbackPolicy<T>,
        lookup: impl Future<Output = LookupResult<T>>,
    ) -> Resolved<T> {
        let resolved = policy.apply(lookup.await);
        if let Some(observer) = &self.observer {
            observer.on_settled(source, resolved.resolution(), resolved.error());
        }
        resolved
    }
}

impl core::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aggregator")
            .field("policies", &self.policies)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
