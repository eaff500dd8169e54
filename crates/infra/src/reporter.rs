//! Final outcome sink.
//!
//! A reporter is passed into each run explicitly; nothing here is global.

use std::sync::Mutex;

use tracing::{error, info};

use storefront_catalog::PageData;
use storefront_core::PageError;

pub trait Reporter: Send + Sync {
    fn on_success(&self, page: &PageData);
    fn on_failure(&self, error: &PageError);
}

/// Reports outcomes as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_success(&self, page: &PageData) {
        info!(
            product_id = %page.product.id,
            coupon = %page.coupon.code,
            discount = page.coupon.discount,
            variants = page.variants.len(),
            "page assembled"
        );
    }

    fn on_failure(&self, err: &PageError) {
        error!(kind = err.kind(), error = %err, "page assembly failed");
    }
}

/// One reported outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Success(PageData),
    Failure(PageError),
}

/// Keeps every reported outcome in memory.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<Report>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn push(&self, report: Report) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report);
        }
    }
}

impl Reporter for RecordingReporter {
    fn on_success(&self, page: &PageData) {
        self.push(Report::Success(page.clone()));
    }

    fn on_failure(&self, error: &PageError) {
        self.push(Report::Failure(error.clone()));
    }
}
