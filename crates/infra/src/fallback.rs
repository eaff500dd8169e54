//! Per-source fallback policy.
//!
//! | Source   | On failure                      |
//! |----------|---------------------------------|
//! | Product  | propagate as fatal              |
//! | Variants | propagate as fatal              |
//! | Coupon   | substitute the blank coupon     |
//!
//! Exactly one source may degrade silently. The table is fixed: there is no way to
//! construct an `Aggregator` with a different one.

use storefront_catalog::{Coupon, Product, Variant};
use storefront_core::{LookupError, LookupResult, PageError, PageResult};

/// What to do with a failed lookup for one source.
#[derive(Debug)]
pub enum FallbackPolicy<T> {
    /// The failure is fatal to the whole page.
    Propagate,
    /// The failure is absorbed and replaced by a default value.
    Substitute(fn() -> T),
}

/// How a settled outcome was resolved. Reported to observers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found,
    Substituted,
    Propagated,
}

/// A settled outcome after its source's policy was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    Found(T),
    Substituted { value: T, cause: LookupError },
    Failed(LookupError),
}

impl<T> Resolved<T> {
    pub fn resolution(&self) -> Resolution {
        match self {
            Resolved::Found(_) => Resolution::Found,
            Resolved::Substituted { .. } => Resolution::Substituted,
            Resolved::Failed(_) => Resolution::Propagated,
        }
    }

    /// The lookup failure behind this outcome, absorbed or not.
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Resolved::Found(_) => None,
            Resolved::Substituted { cause, .. } => Some(cause),
            Resolved::Failed(e) => Some(e),
        }
    }

    /// Drops any absorbed cause; only propagated failures reach the error channel.
    pub fn into_result(self) -> PageResult<T> {
        match self {
            Resolved::Found(value) | Resolved::Substituted { value, .. } => Ok(value),
            Resolved::Failed(e) => Err(PageError::Lookup(e)),
        }
    }
}

impl<T> Clone for FallbackPolicy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FallbackPolicy<T> {}

impl<T> FallbackPolicy<T> {
    pub fn apply(&self, outcome: LookupResult<T>) -> Resolved<T> {
        match (outcome, self) {
            (Ok(value), _) => Resolved::Found(value),
            (Err(e), FallbackPolicy::Propagate) => Resolved::Failed(e),
            (Err(cause), FallbackPolicy::Substitute(default)) => Resolved::Substituted {
                value: default(),
                cause,
            },
        }
    }
}

/// One policy per source.
#[derive(Debug, Clone, Copy)]
pub struct PolicyTable {
    pub product: FallbackPolicy<Product>,
    pub variants: FallbackPolicy<Vec<Variant>>,
    pub coupon: FallbackPolicy<Coupon>,
}

impl PolicyTable {
    pub const STANDARD: PolicyTable = PolicyTable {
        product: FallbackPolicy::Propagate,
        variants: FallbackPolicy::Propagate,
        coupon: FallbackPolicy::Substitute(Coupon::blank),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CouponCode, ProductId, Source, StoreError};

    #[test]
    fn only_coupon_is_optional() {
        let table = PolicyTable::STANDARD;
        assert!(matches!(table.product, FallbackPolicy::Propagate));
        assert!(matches!(table.variants, FallbackPolicy::Propagate));
        assert!(matches!(table.coupon, FallbackPolicy::Substitute(_)));
    }

    #[test]
    fn product_failure_propagates() {
        let err = LookupError::ProductNotFound(ProductId::new("999"));
        let resolved = PolicyTable::STANDARD.product.apply(Err(err.clone()));

        assert_eq!(resolved.resolution(), Resolution::Propagated);
        assert_eq!(resolved.into_result(), Err(PageError::Lookup(err)));
    }

    #[test]
    fn variants_failure_propagates() {
        let err = LookupError::VariantsNotFound(ProductId::new("999"));
        let resolved = PolicyTable::STANDARD.variants.apply(Err(err.clone()));
        assert_eq!(resolved.into_result(), Err(PageError::Lookup(err)));
    }

    #[test]
    fn coupon_failure_becomes_blank_coupon() {
        let err = LookupError::CouponNotFound(CouponCode::new("WRONG"));
        let resolved = PolicyTable::STANDARD.coupon.apply(Err(err.clone()));

        assert_eq!(resolved.resolution(), Resolution::Substituted);
        assert_eq!(resolved.error(), Some(&err));
        assert_eq!(resolved.into_result(), Ok(Coupon::blank()));
    }

    #[test]
    fn unavailable_coupon_store_also_becomes_blank_coupon() {
        let err = LookupError::unavailable(Source::Coupon, StoreError::unavailable("timeout"));
        let resolved = PolicyTable::STANDARD.coupon.apply(Err(err));
        assert_eq!(resolved.into_result(), Ok(Coupon::blank()));
    }

    #[test]
    fn successes_pass_through_untouched() {
        let coupon = Coupon::new("10OFF", 10.0);
        let resolved = PolicyTable::STANDARD.coupon.apply(Ok(coupon.clone()));
        assert_eq!(resolved.resolution(), Resolution::Found);
        assert_eq!(resolved.error(), None);
        assert_eq!(resolved.into_result(), Ok(coupon));
    }
}
