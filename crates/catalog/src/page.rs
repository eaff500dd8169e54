//! The assembled product page.

use serde::{Deserialize, Serialize};

use crate::coupon::Coupon;
use crate::discount::apply_discount;
use crate::product::Product;
use crate::variant::{DiscountedVariant, Variant};

/// All three sources settled and fallback applied, discount not yet applied.
///
/// `coupon` is always a real value here (possibly the blank coupon), so the
/// discount can only ever be computed from the post-fallback coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub product: Product,
    pub variants: Vec<Variant>,
    pub coupon: Coupon,
}

impl MergedRecord {
    /// Apply the coupon to every variant. Consumes the record, so the transform
    /// runs exactly once per merge.
    pub fn into_page_data(self) -> PageData {
        let variants = apply_discount(&self.variants, self.coupon.discount);
        PageData {
            product: self.product,
            coupon: self.coupon,
            variants,
        }
    }
}

/// The pipeline's only successful output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub product: Product,
    pub coupon: Coupon,
    pub variants: Vec<DiscountedVariant>,
}
