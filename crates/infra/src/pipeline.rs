//! End-to-end page pipeline: validate, aggregate, discount, report.

use std::sync::Arc;

use tracing::{Instrument, info_span};

use storefront_catalog::{PageData, Parameters, RawParameters};
use storefront_core::PageResult;

use crate::aggregator::Aggregator;
use crate::observer::SettlementObserver;
use crate::reporter::Reporter;
use crate::store::Stores;

#[derive(Debug)]
pub struct PagePipeline {
    aggregator: Aggregator,
}

impl PagePipeline {
    pub fn new(stores: Stores) -> Self {
        Self {
            aggregator: Aggregator::new(stores),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SettlementObserver>) -> Self {
        self.aggregator = self.aggregator.with_observer(observer);
        self
    }

    /// Aggregate and discount. Does not report.
    pub async fn assemble(&self, params: &Parameters) -> PageResult<PageData> {
        let merged = self.aggregator.aggregate(params).await?;
        Ok(merged.into_page_data())
    }

    /// Run one request and report its outcome exactly once.
    ///
    /// Invalid input is rejected before any store is contacted.
    pub async fn run(&self, raw: RawParameters, reporter: &dyn Reporter) -> PageResult<PageData> {
        let span = info_span!(
            "page_pipeline",
            product_id = raw.product_id.as_deref(),
            coupon_code = raw.coupon_code.as_deref(),
        );

        let outcome = async {
            let params = Parameters::validate(raw)?;
            self.assemble(&params).await
        }
        .instrument(span)
        .await;

        match &outcome {
            Ok(page) => reporter.on_success(page),
            Err(e) => reporter.on_failure(e),
        }
        outcome
    }
}
