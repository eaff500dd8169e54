//! Source gateways.
//!
//! Each gateway is a single store call normalized into `LookupResult<T>`. There is
//! no retry here; a store that wants retries implements them itself.

use storefront_catalog::{Coupon, Product, Variant};
use storefront_core::{CouponCode, LookupError, LookupResult, ProductId, Source};

use crate::store::{CouponStore, ProductStore, VariantStore};

pub async fn fetch_product(store: &dyn ProductStore, product_id: &ProductId) -> LookupResult<Product> {
    match store.lookup_product(product_id).await {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(LookupError::ProductNotFound(product_id.clone())),
        Err(e) => Err(LookupError::unavailable(Source::Product, e)),
    }
}

/// Fails with `VariantsNotFound` when the store returns no records.
pub async fn fetch_variants(
    store: &dyn VariantStore,
    product_id: &ProductId,
) -> LookupResult<Vec<Variant>> {
    match store.lookup_variants(product_id).await {
        Ok(variants) if variants.is_empty() => {
            Err(LookupError::VariantsNotFound(product_id.clone()))
        }
        Ok(variants) => Ok(variants),
        Err(e) => Err(LookupError::unavailable(Source::Variants, e)),
    }
}

pub async fn fetch_coupon(store: &dyn CouponStore, code: &CouponCode) -> LookupResult<Coupon> {
    match store.lookup_coupon(code).await {
        Ok(Some(coupon)) => Ok(coupon),
        Ok(None) => Err(LookupError::CouponNotFound(code.clone())),
        Err(e) => Err(LookupError::unavailable(Source::Coupon, e)),
    }
}
