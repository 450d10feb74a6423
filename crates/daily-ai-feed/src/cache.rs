//! Single-slot paper cache with TTL and day-rollover invalidation.
//!
//! Holds the most recent fetch result. The list is served only while it is
//! non-empty, was fetched today (local calendar) and is no older than the TTL.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, TimeDelta};

use crate::clock::{Clock, SystemClock};
use crate::models::{CacheInfo, Paper};

/// In-memory cache of the last fetched papers.
pub struct PaperCache {
    papers: Vec<Paper>,
    fetched_at: Option<DateTime<Local>>,
    fetched_date: Option<NaiveDate>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl PaperCache {
    /// Create an empty cache on the system clock.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create an empty cache reading time from `clock`.
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            papers: Vec::new(),
            fetched_at: None,
            fetched_date: None,
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    /// Check whether the held list may be served.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let Some(fetched_at) = self.fetched_at else {
            return false;
        };
        if self.papers.is_empty() {
            return false;
        }

        let now = self.clock.now();
        self.fetched_date == Some(now.date_naive()) && now - fetched_at <= self.ttl
    }

    /// Cached papers if valid, otherwise an empty list.
    #[must_use]
    pub fn get(&self) -> Vec<Paper> {
        if self.is_valid() { self.papers.clone() } else { Vec::new() }
    }

    /// Store a fresh fetch result.
    pub fn update(&mut self, papers: Vec<Paper>) {
        let now = self.clock.now();
        let today = now.date_naive();

        if let Some(previous) = self.fetched_date {
            if previous != today {
                tracing::info!(%previous, %today, "New day detected, clearing cached papers");
                self.papers.clear();
            }
        }

        self.papers = papers;
        self.fetched_at = Some(now);
        self.fetched_date = Some(today);

        tracing::info!(count = self.papers.len(), date = %today, "Cache updated");
    }

    /// Diagnostic snapshot.
    #[must_use]
    pub fn info(&self) -> CacheInfo {
        let Some(fetched_at) = self.fetched_at else {
            return CacheInfo::default();
        };

        CacheInfo {
            age_minutes: (self.clock.now() - fetched_at).num_minutes(),
            fetched_date: self.fetched_date,
            is_valid: self.is_valid(),
            count: self.papers.len(),
        }
    }

    /// Drop everything and return to the never-updated state.
    pub fn reset(&mut self) {
        self.papers.clear();
        self.fetched_at = None;
        self.fetched_date = None;
        tracing::info!("Cache cleared manually");
    }
}

impl std::fmt::Debug for PaperCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperCache")
            .field("count", &self.papers.len())
            .field("fetched_at", &self.fetched_at)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(30 * 60);

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).single().expect("unambiguous local time")
    }

    fn paper(title: &str) -> Paper {
        Paper { title: title.to_string(), ..Default::default() }
    }

    fn cache_at(start: DateTime<Local>) -> (PaperCache, ManualClock) {
        let clock = ManualClock::new(start);
        (PaperCache::with_clock(TTL, Arc::new(clock.clone())), clock)
    }

    #[test]
    fn test_new_cache_is_invalid_and_empty() {
        let (cache, _) = cache_at(noon());
        assert!(!cache.is_valid());
        assert!(cache.get().is_empty());
        assert_eq!(cache.info(), CacheInfo::default());
    }

    #[test]
    fn test_update_makes_cache_valid() {
        let (mut cache, _) = cache_at(noon());
        let papers = vec![paper("A"), paper("B")];

        cache.update(papers.clone());

        assert!(cache.is_valid());
        assert_eq!(cache.get(), papers);
    }

    #[test]
    fn test_empty_update_is_not_valid() {
        let (mut cache, _) = cache_at(noon());
        cache.update(Vec::new());

        assert!(!cache.is_valid());
        let info = cache.info();
        assert_eq!(info.count, 0);
        assert_eq!(info.fetched_date, Some(noon().date_naive()));
    }

    #[test]
    fn test_ttl_boundary() {
        let (mut cache, clock) = cache_at(noon());
        cache.update(vec![paper("A")]);

        clock.advance(TimeDelta::minutes(30));
        assert!(cache.is_valid(), "exactly at TTL is still valid");

        clock.advance(TimeDelta::seconds(1));
        assert!(!cache.is_valid());
        assert!(cache.get().is_empty());
        assert_eq!(cache.info().count, 1, "expired papers are held, not served");
    }

    #[test]
    fn test_day_change_invalidates_within_ttl() {
        let late = Local.with_ymd_and_hms(2026, 3, 10, 23, 50, 0).single().expect("local time");
        let (mut cache, clock) = cache_at(late);
        cache.update(vec![paper("A")]);

        clock.advance(TimeDelta::minutes(15));
        assert!(!cache.is_valid());
    }

    #[test]
    fn test_update_on_new_day_replaces_papers() {
        let (mut cache, clock) = cache_at(noon() - TimeDelta::days(1));
        cache.update(vec![paper("yesterday")]);

        clock.set(noon());
        cache.update(vec![paper("today")]);

        assert_eq!(cache.get(), vec![paper("today")]);
        assert_eq!(cache.info().fetched_date, Some(noon().date_naive()));
    }

    #[test]
    fn test_info_reports_age() {
        let (mut cache, clock) = cache_at(noon());
        cache.update(vec![paper("A"), paper("B")]);

        clock.advance(TimeDelta::seconds(12 * 60 + 59));
        let info = cache.info();
        assert_eq!(info.age_minutes, 12);
        assert!(info.is_valid);
        assert_eq!(info.count, 2);
    }

    #[test]
    fn test_reset_returns_to_empty_state() {
        let (mut cache, _) = cache_at(noon());
        cache.update(vec![paper("A")]);

        cache.reset();

        assert!(!cache.is_valid());
        assert_eq!(cache.info(), CacheInfo::default());
    }
}
