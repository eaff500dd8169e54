//! The external record sources a page is assembled from.

use serde::{Deserialize, Serialize};

/// One of the three independently-queried stores.
///
/// Declaration order is the fatal-error priority: when several required sources
/// fail in the same run, the earliest one here is reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Product,
    Variants,
    Coupon,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Product, Source::Variants, Source::Coupon];

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Product => "product",
            Source::Variants => "variants",
            Source::Coupon => "coupon",
        }
    }
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
