//! Error taxonomy for page assembly.

use thiserror::Error;

use crate::id::{CouponCode, ProductId};
use crate::source::Source;

/// Result type returned by the page pipeline.
pub type PageResult<T> = Result<T, PageError>;

/// Result type returned by a single source gateway.
pub type LookupResult<T> = Result<T, LookupError>;

/// Failure reported by an external store for reasons other than "no record".
///
/// Absence is not an error at the store level; stores return `None` (or an empty
/// list) and the gateway decides what that means.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Settled failure of one source gateway.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("variants not found for product: {0}")]
    VariantsNotFound(ProductId),

    #[error("coupon not found: {0}")]
    CouponNotFound(CouponCode),

    /// The store itself failed (connection, timeout, ...).
    #[error("{store} store unavailable: {reason}")]
    StoreUnavailable { store: Source, reason: String },
}

impl LookupError {
    pub fn unavailable(store: Source, err: StoreError) -> Self {
        let StoreError::Unavailable(reason) = err;
        Self::StoreUnavailable { store, reason }
    }

    /// The source this failure settled from.
    pub fn store(&self) -> Source {
        match self {
            LookupError::ProductNotFound(_) => Source::Product,
            LookupError::VariantsNotFound(_) => Source::Variants,
            LookupError::CouponNotFound(_) => Source::Coupon,
            LookupError::StoreUnavailable { store, .. } => *store,
        }
    }

    /// Stable taxonomy name, used by reporters.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::ProductNotFound(_) => "ProductNotFound",
            LookupError::VariantsNotFound(_) => "VariantsNotFound",
            LookupError::CouponNotFound(_) => "CouponNotFound",
            LookupError::StoreUnavailable { .. } => "StoreUnavailable",
        }
    }
}

/// Terminal failure of a pipeline run.
///
/// Only validation failures and failures of required sources are ever wrapped
/// here; coupon failures are absorbed before aggregation completes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Raw input did not have the required shape.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl PageError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PageError::Validation(_) => "ValidationError",
            PageError::Lookup(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_know_their_source() {
        assert_eq!(
            LookupError::ProductNotFound(ProductId::new("999")).store(),
            Source::Product
        );
        assert_eq!(
            LookupError::VariantsNotFound(ProductId::new("999")).store(),
            Source::Variants
        );
        assert_eq!(
            LookupError::CouponNotFound(CouponCode::new("WRONG")).store(),
            Source::Coupon
        );
        assert_eq!(
            LookupError::unavailable(Source::Variants, StoreError::unavailable("timeout")).store(),
            Source::Variants
        );
    }

    #[test]
    fn page_error_kind_passes_through_lookup_kind() {
        let err: PageError = LookupError::ProductNotFound(ProductId::new("999")).into();
        assert_eq!(err.kind(), "ProductNotFound");
        assert_eq!(err.to_string(), "product not found: 999");
        assert_eq!(PageError::validation("couponCode is required").kind(), "ValidationError");
    }

    #[test]
    fn unavailable_message_names_the_store() {
        let err = LookupError::unavailable(Source::Product, StoreError::unavailable("connection reset"));
        assert_eq!(err.to_string(), "product store unavailable: connection reset");
    }
}
