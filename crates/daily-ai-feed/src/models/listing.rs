//! Read-side snapshots handed to the presentation layer.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::Paper;

/// Diagnostic snapshot of the paper cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheInfo {
    /// Whole minutes since the last update, 0 when never updated.
    pub age_minutes: i64,

    /// Local calendar date of the last update.
    pub fetched_date: Option<NaiveDate>,

    /// Whether the cached list would be served.
    pub is_valid: bool,

    /// Number of papers held.
    pub count: usize,
}

/// Payload of the "list papers" operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperListing {
    /// Papers after the category filter.
    pub papers: Vec<Paper>,

    /// Number of papers after filtering.
    pub total_count: usize,

    /// Number of papers before filtering.
    pub all_count: usize,

    /// Number of distinct categories across all papers.
    pub category_count: usize,

    /// Distinct category codes across all papers.
    pub categories: BTreeSet<String>,

    /// Cache age in minutes.
    pub cache_age_minutes: i64,

    /// Active category filter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PaperListing {
    /// True when nothing has been fetched at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.all_count == 0
    }
}
