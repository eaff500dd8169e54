use serde::{Deserialize, Serialize};

use storefront_core::CouponCode;

/// A discount coupon. `discount` is a percentage (10.0 = 10 % off).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: CouponCode,
    pub discount: f64,
}

impl Coupon {
    pub fn new(code: impl Into<CouponCode>, discount: f64) -> Self {
        Self {
            code: code.into(),
            discount,
        }
    }

    /// The zero-discount coupon substituted when the coupon lookup fails.
    pub fn blank() -> Self {
        Self {
            code: CouponCode::new(""),
            discount: 0.0,
        }
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::blank()
    }
}
