//! Discount transform.
//!
//! Every discounted price is rounded to cents. There is no unrounded path: the same
//! rounding is applied to every variant of every page.

use crate::variant::{DiscountedVariant, Variant};

/// Round to two decimal places, half away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `price` reduced by `discount` percent, rounded to cents.
pub fn discounted_price(price: f64, discount: f64) -> f64 {
    round_to_cents(price * (1.0 - discount / 100.0))
}

/// Apply a percentage discount to each variant, preserving order.
pub fn apply_discount(variants: &[Variant], discount: f64) -> Vec<DiscountedVariant> {
    variants
        .iter()
        .map(|variant| DiscountedVariant {
            price_with_discount: discounted_price(variant.price, discount),
            variant: variant.clone(),
        })
        .collect()
}
