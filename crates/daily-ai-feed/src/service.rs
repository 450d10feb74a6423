//! Paper retrieval service.
//!
//! The one entry point the web layer calls. Serves the cached list while it is
//! fresh and goes to the [`PaperSource`] on a miss or a forced refresh. Source
//! failures never propagate: the caller gets fresh, cached or empty data.
//!
//! Refreshes are single-flighted. A request that misses while another refresh
//! is running waits for it and re-reads the cache instead of fetching again.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::cache::PaperCache;
use crate::client::{FetchOutcome, PaperSource};
use crate::config::Config;
use crate::models::{CacheInfo, Paper, PaperListing};

/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Cache-backed access to recent papers.
pub struct PaperService {
    source: Arc<dyn PaperSource>,
    cache: RwLock<PaperCache>,
    refresh_lock: Mutex<()>,
    days_back: u32,
    max_results: u32,
}

impl PaperService {
    /// Create a service with a cache on the system clock.
    #[must_use]
    pub fn new(source: Arc<dyn PaperSource>, config: &Config) -> Self {
        Self::with_cache(source, PaperCache::new(config.cache_ttl), config)
    }

    /// Create a service around an existing cache.
    #[must_use]
    pub fn with_cache(source: Arc<dyn PaperSource>, cache: PaperCache, config: &Config) -> Self {
        Self {
            source,
            cache: RwLock::new(cache),
            refresh_lock: Mutex::new(()),
            days_back: config.days_back,
            max_results: config.max_results,
        }
    }

    /// Papers from cache or source, using the configured window.
    pub async fn papers(&self) -> Vec<Paper> {
        self.get_papers(false, self.days_back, self.max_results).await
    }

    /// Force a trip to the source, using the configured window.
    pub async fn refresh(&self) -> Vec<Paper> {
        self.get_papers(true, self.days_back, self.max_results).await
    }

    /// Get papers, consulting the cache unless `force_refresh` is set.
    pub async fn get_papers(&self, force_refresh: bool, days_back: u32, max_results: u32) -> Vec<Paper> {
        if !force_refresh {
            let cached = self.cache.read().await.get();
            if !cached.is_empty() {
                tracing::debug!(count = cached.len(), "Using cached papers");
                return cached;
            }
        }

        let _refreshing = self.refresh_lock.lock().await;

        if !force_refresh {
            let cached = self.cache.read().await.get();
            if !cached.is_empty() {
                tracing::debug!(count = cached.len(), "Cache filled by concurrent refresh");
                return cached;
            }
        }

        tracing::info!(force_refresh, days_back, max_results, "Fetching fresh papers");

        match self.source.recent_papers(days_back, max_results).await {
            Ok(outcome) => {
                if let FetchOutcome::Unavailable(err) = &outcome {
                    tracing::warn!(error = %err, "Paper source unavailable, storing empty result");
                }
                let papers = outcome.into_papers();
                self.cache.write().await.update(papers.clone());
                papers
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching papers, falling back to cache");
                self.cache.read().await.get()
            }
        }
    }

    /// Build the "list papers" payload for an optional category filter.
    pub async fn listing(&self, category: Option<&str>) -> PaperListing {
        let all = self.papers().await;
        let categories = Self::all_categories(&all);
        let papers = Self::filter_by_category(&all, category);
        let info = self.cache_info().await;

        PaperListing {
            total_count: papers.len(),
            all_count: all.len(),
            category_count: categories.len(),
            categories,
            cache_age_minutes: info.age_minutes,
            category: category.filter(|c| *c != ALL_CATEGORIES).map(str::to_string),
            papers,
        }
    }

    /// Keep papers tagged with `category`; `None` or `"all"` keeps everything.
    #[must_use]
    pub fn filter_by_category(papers: &[Paper], category: Option<&str>) -> Vec<Paper> {
        match category {
            None | Some(ALL_CATEGORIES) => papers.to_vec(),
            Some(code) => papers.iter().filter(|p| p.has_category(code)).cloned().collect(),
        }
    }

    /// Distinct category codes across `papers`.
    #[must_use]
    pub fn all_categories(papers: &[Paper]) -> BTreeSet<String> {
        papers.iter().flat_map(|p| p.categories.iter().cloned()).collect()
    }

    /// Cache diagnostics.
    pub async fn cache_info(&self) -> CacheInfo {
        self.cache.read().await.info()
    }

    /// Empty the cache.
    pub async fn reset_cache(&self) {
        self.cache.write().await.reset();
    }
}

impl std::fmt::Debug for PaperService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperService")
            .field("days_back", &self.days_back)
            .field("max_results", &self.max_results)
            .finish()
    }
}
