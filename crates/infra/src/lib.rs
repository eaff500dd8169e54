//! Infrastructure layer: store adapters, source gateways and the page pipeline.
//!
//! ## Flow
//!
//! `RawParameters` → validator → [`Aggregator`] (product, variants and coupon
//! gateways run concurrently) → per-source [`fallback`] policy → `MergedRecord`
//! → discount transform → [`Reporter`].

pub mod aggregator;
pub mod config;
pub mod fallback;
pub mod gateway;
pub mod observer;
pub mod pipeline;
pub mod reporter;
pub mod store;

pub use aggregator::Aggregator;
pub use config::PipelineConfig;
pub use fallback::{FallbackPolicy, PolicyTable, Resolution, Resolved};
pub use observer::{SettlementObserver, TracingObserver};
pub use pipeline::PagePipeline;
pub use reporter::{RecordingReporter, Report, Reporter, TracingReporter};
pub use store::{CouponStore, InMemoryCatalogStore, ProductStore, Stores, VariantStore};
