//! Catalogue domain module.
//!
//! Records returned by the product, variant and coupon stores, the input validator,
//! and the discount transform. Everything here is deterministic domain logic (no IO,
//! no async runtime).

pub mod coupon;
pub mod discount;
pub mod page;
pub mod params;
pub mod product;
pub mod variant;

pub use coupon::Coupon;
pub use discount::{apply_discount, discounted_price, round_to_cents};
pub use page::{MergedRecord, PageData};
pub use params::{Parameters, RawParameters};
pub use product::Product;
pub use variant::{DiscountedVariant, Variant};
