//! Wiring: seeded stores, pipeline, observer.

use std::ffi::OsString;
use std::sync::Arc;

use storefront_catalog::PageData;
use storefront_core::PageResult;
use storefront_infra::{
    InMemoryCatalogStore, PagePipeline, PipelineConfig, Reporter, Stores, TracingObserver,
};

use crate::args;

/// Build the pipeline for `config` over the demo catalogue.
pub fn build_pipeline(config: &PipelineConfig) -> PagePipeline {
    let store = InMemoryCatalogStore::seeded().with_latency(config.store_latency);
    PagePipeline::new(Stores::shared(Arc::new(store))).with_observer(Arc::new(TracingObserver))
}

/// Run once for the given positional arguments, reporting through `reporter`.
pub async fn run<I, A>(
    config: &PipelineConfig,
    args: I,
    reporter: &dyn Reporter,
) -> PageResult<PageData>
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
{
    let pipeline = build_pipeline(config);
    pipeline.run(args::raw_parameters(args), reporter).await
}
