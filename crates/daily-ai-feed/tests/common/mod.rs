//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};

use daily_ai_feed::cache::PaperCache;
use daily_ai_feed::clock::ManualClock;
use daily_ai_feed::models::Paper;
use daily_ai_feed::{ClientError, Config, FetchOutcome, PaperService, PaperSource, SourceError};

/// What a [`StubSource`] answers with.
#[derive(Debug, Clone)]
pub enum StubMode {
    Papers(Vec<Paper>),
    Unavailable,
    Fault,
}

/// Paper source that counts calls and answers from a script.
#[derive(Debug)]
pub struct StubSource {
    calls: AtomicUsize,
    mode: Mutex<StubMode>,
}

impl StubSource {
    pub fn returning(papers: Vec<Paper>) -> Self {
        Self { calls: AtomicUsize::new(0), mode: Mutex::new(StubMode::Papers(papers)) }
    }

    pub fn unavailable() -> Self {
        Self { calls: AtomicUsize::new(0), mode: Mutex::new(StubMode::Unavailable) }
    }

    pub fn set_mode(&self, mode: StubMode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PaperSource for StubSource {
    async fn recent_papers(
        &self,
        _days_back: u32,
        _max_results: u32,
    ) -> Result<FetchOutcome, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mode = self.mode.lock().unwrap().clone();
        match mode {
            StubMode::Papers(papers) => Ok(FetchOutcome::Fetched(papers)),
            StubMode::Unavailable => {
                Ok(FetchOutcome::Unavailable(ClientError::server(503, "stub unavailable")))
            }
            StubMode::Fault => Err(SourceError::internal("stub fault")),
        }
    }
}

/// Paper with a title and category codes.
pub fn paper(title: &str, categories: &[&str]) -> Paper {
    Paper {
        title: title.to_string(),
        authors: vec!["Test Author".to_string()],
        r#abstract: format!("Abstract for {title}"),
        published_at: Some(Utc::now()),
        published_display: "2026-03-10 09:00:00 UTC".to_string(),
        source_id: format!("http://arxiv.org/abs/{}", title.replace(' ', "-")),
        categories: categories.iter().map(|c| (*c).to_string()).collect(),
    }
}

/// Fixed local noon used as the starting instant for clock-driven tests.
pub fn noon() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).single().expect("unambiguous local time")
}

/// Service over `source` with a cache on a manual clock.
pub fn service_with_clock(source: Arc<StubSource>) -> (PaperService, ManualClock) {
    let config = Config::default();
    let clock = ManualClock::new(noon());
    let cache = PaperCache::with_clock(config.cache_ttl, Arc::new(clock.clone()));
    (PaperService::with_cache(source, cache, &config), clock)
}

/// One Atom entry.
pub fn entry_xml(id: &str, title: &str, published: DateTime<Utc>, categories: &[&str]) -> String {
    let categories: String = categories
        .iter()
        .map(|c| format!(r#"<category term="{c}" scheme="http://arxiv.org/schemas/atom"/>"#))
        .collect();

    format!(
        r#"<entry>
<id>http://arxiv.org/abs/{id}</id>
<published>{published}</published>
<title>{title}</title>
<summary>Summary of {title}.</summary>
<author><name>Test Author</name></author>
{categories}
</entry>"#,
        published = published.format("%Y-%m-%dT%H:%M:%SZ"),
    )
}

/// Atom feed around the given entries.
pub fn feed_xml(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:arxiv="http://arxiv.org/schemas/atom">
<title type="html">ArXiv Query</title>
{}
</feed>"#,
        entries.join("\n")
    )
}

/// Timestamp `hours` before now.
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc::now() - TimeDelta::hours(hours)
}
