//! External store contracts.
//!
//! Stores answer "no record" with `None` (or an empty list); `Err` is reserved for
//! the store itself failing. Translating absence into a typed lookup failure is
//! the gateway's job, not the store's.

pub mod in_memory;

use std::sync::Arc;

use async_trait::async_trait;

use storefront_catalog::{Coupon, Product, Variant};
use storefront_core::{CouponCode, ProductId, StoreError};

pub use in_memory::InMemoryCatalogStore;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn lookup_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError>;
}

#[async_trait]
pub trait VariantStore: Send + Sync {
    /// Variants for a product in store order. Empty when none match.
    async fn lookup_variants(&self, product_id: &ProductId) -> Result<Vec<Variant>, StoreError>;
}

#[async_trait]
pub trait CouponStore: Send + Sync {
    async fn lookup_coupon(&self, code: &CouponCode) -> Result<Option<Coupon>, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn lookup_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        (**self).lookup_product(id).await
    }
}

#[async_trait]
impl<S> VariantStore for Arc<S>
where
    S: VariantStore + ?Sized,
{
    async fn lookup_variants(&self, product_id: &ProductId) -> Result<Vec<Variant>, StoreError> {
        (**self).lookup_variants(product_id).await
    }
}

#[async_trait]
impl<S> CouponStore for Arc<S>
where
    S: CouponStore + ?Sized,
{
    async fn lookup_coupon(&self, code: &CouponCode) -> Result<Option<Coupon>, StoreError> {
        (**self).lookup_coupon(code).await
    }
}

/// The three stores a page is assembled from, injected together.
#[derive(Clone)]
pub struct Stores {
    pub products: Arc<dyn ProductStore>,
    pub variants: Arc<dyn VariantStore>,
    pub coupons: Arc<dyn CouponStore>,
}

impl Stores {
    pub fn new(
        products: Arc<dyn ProductStore>,
        variants: Arc<dyn VariantStore>,
        coupons: Arc<dyn CouponStore>,
    ) -> Self {
        Self {
            products,
            variants,
            coupons,
        }
    }

    /// Use one backend for all three sources.
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: ProductStore + VariantStore + CouponStore + 'static,
    {
        Self {
            products: store.clone(),
            variants: store.clone(),
            coupons: store,
        }
    }
}

impl core::fmt::Debug for Stores {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}
