//! Plain-text diagnostics.

use crate::models::CacheInfo;

/// Render the cache status report served at `/debug`.
#[must_use]
pub fn format_debug_report(info: &CacheInfo, papers_served: usize) -> String {
    let date = info.fetched_date.map_or_else(|| "None".to_string(), |d| d.to_string());

    format!(
        "Cache Status:\n\
         - Papers in cache: {papers_served}\n\
         - Cache date: {date}\n\
         - Cache age: {} minutes\n\
         - Cache valid: {}\n\
         - Papers count: {}\n",
        info.age_minutes, info.is_valid, info.count
    )
}
