//! Data models for papers and cache diagnostics.
//!
//! Serialized field names are camelCase to match the JSON listing.

mod listing;
mod paper;

pub use listing::{CacheInfo, PaperListing};
pub use paper::{MISSING, Paper};
