use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use storefront_catalog::{Coupon, Product, Variant};
use storefront_core::{CouponCode, Entity, ProductId, StoreError};

use super::{CouponStore, ProductStore, VariantStore};

/// In-memory catalogue backing all three store contracts.
///
/// Intended for tests/dev. `latency` is slept before every lookup to stand in for a
/// database round-trip.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<HashMap<ProductId, Product>>,
    variants: RwLock<HashMap<ProductId, Vec<Variant>>>,
    coupons: RwLock<HashMap<CouponCode, Coupon>>,
    latency: Duration,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo catalogue: one t-shirt in three sizes and a 10 % coupon.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.insert_product(Product::new("123", "Magical T-Shirt"));
        store.insert_variants(
            ProductId::new("123"),
            vec![
                Variant::new("123", "small", "Small", 8.99),
                Variant::new("123", "medium", "Medium", 10.99),
                Variant::new("123", "large", "Large", 12.99),
            ],
        );
        store.insert_coupon(Coupon::new("10OFF", 10.0));
        store
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn insert_product(&self, product: Product) {
        if let Ok(mut map) = self.products.write() {
            map.insert(Entity::id(&product).clone(), product);
        }
    }

    pub fn insert_variants(&self, product_id: ProductId, variants: Vec<Variant>) {
        if let Ok(mut map) = self.variants.write() {
            map.insert(product_id, variants);
        }
    }

    pub fn insert_coupon(&self, coupon: Coupon) {
        if let Ok(mut map) = self.coupons.write() {
            map.insert(coupon.code.clone(), coupon);
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn poisoned() -> StoreError {
    StoreError::unavailable("lock poisoned")
}

#[async_trait]
impl ProductStore for InMemoryCatalogStore {
    async fn lookup_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.simulate_latency().await;
        let map = self.products.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }
}

#[async_trait]
impl VariantStore for InMemoryCatalogStore {
    async fn lookup_variants(&self, product_id: &ProductId) -> Result<Vec<Variant>, StoreError> {
        self.simulate_latency().await;
        let map = self.variants.read().map_err(|_| poisoned())?;
        Ok(map.get(product_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl CouponStore for InMemoryCatalogStore {
    async fn lookup_coupon(&self, code: &CouponCode) -> Result<Option<Coupon>, StoreError> {
        self.simulate_latency().await;
        let map = self.coupons.read().map_err(|_| poisoned())?;
        Ok(map.get(code).cloned())
    }
}
