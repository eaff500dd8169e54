//! Input validation.
//!
//! Raw input is checked for shape only (both fields present). No
//! business validation happens here: an unknown product id is a valid parameter
//! that the product store later fails to find.

use serde::{Deserialize, Serialize};

use storefront_core::{CouponCode, PageError, PageResult, ProductId};

/// Unvalidated input as obtained from the process boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameters {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub coupon_code: Option<String>,
}

impl RawParameters {
    pub fn new(product_id: Option<String>, coupon_code: Option<String>) -> Self {
        Self {
            product_id,
            coupon_code,
        }
    }
}

/// Validated pipeline input. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    product_id: ProductId,
    coupon_code: CouponCode,
}

impl Parameters {
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn coupon_code(&self) -> &CouponCode {
        &self.coupon_code
    }

    /// Validate boundary input. Every missing field is reported, not just the first.
    pub fn validate(raw: RawParameters) -> PageResult<Self> {
        let mut issues = Vec::new();
        if raw.product_id.is_none() {
            issues.push("productId: required");
        }
        if raw.coupon_code.is_none() {
            issues.push("couponCode: required");
        }

        match (raw.product_id, raw.coupon_code) {
            (Some(product_id), Some(coupon_code)) => Ok(Self {
                product_id: ProductId::new(product_id),
                coupon_code: CouponCode::new(coupon_code),
            }),
            _ => Err(PageError::validation(issues.join("; "))),
        }
    }
}

impl TryFrom<RawParameters> for Parameters {
    type Error = PageError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::validate(raw)
    }
}
