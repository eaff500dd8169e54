//! `storefront-core` — shared building blocks for page assembly.
//!
//! This crate contains **pure** primitives (no IO, no async runtime): identifiers,
//! the source enumeration and the error taxonomy every other crate speaks.

pub mod entity;
pub mod error;
pub mod id;
pub mod source;

pub use entity::Entity;
pub use error::{LookupError, LookupResult, PageError, PageResult, StoreError};
pub use id::{CouponCode, ProductId};
pub use source::Source;
