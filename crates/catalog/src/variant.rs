use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// A purchasable variant of a product (size, colour, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    pub price: f64,
}

impl Variant {
    pub fn new(
        product_id: impl Into<ProductId>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            sku: sku.into(),
            name: name.into(),
            price,
        }
    }
}

/// A variant with the page's coupon applied. Derived only, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedVariant {
    #[serde(flatten)]
    pub variant: Variant,
    pub price_with_discount: f64,
}

impl DiscountedVariant {
    pub fn price(&self) -> f64 {
        self.variant.price
    }

    pub fn sku(&self) -> &str {
        &self.variant.sku
    }
}
