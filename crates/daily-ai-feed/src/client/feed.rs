//! Atom feed parsing and normalization.
//!
//! arXiv answers queries with an Atom document. Every field is optional at this
//! layer; missing values fall back to placeholders so one sparse entry never
//! drops the whole response.

use std::sync::LazyLock;

use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use serde::Deserialize;

use crate::error::ClientResult;
use crate::models::{MISSING, Paper};

/// Display format for parsed publication timestamps.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\r\n]+\s*").expect("valid line break regex pattern"));

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    published: Option<String>,
    #[serde(rename = "author", default)]
    authors: Vec<Author>,
    #[serde(rename = "category", default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct Author {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(rename = "@term", default)]
    term: Option<String>,
}

/// Parse an arXiv Atom response into papers.
///
/// # Errors
///
/// Returns [`ClientError::Parse`](crate::error::ClientError::Parse) when the
/// document is not well-formed.
pub fn parse_feed(xml: &str) -> ClientResult<Vec<Paper>> {
    let feed: Feed = quick_xml::de::from_str(xml)?;
    Ok(feed.entries.into_iter().map(Entry::into_paper).collect())
}

/// Keep papers published within the last `days_back` days of `now`.
///
/// Papers without a parsed timestamp are dropped.
#[must_use]
pub fn filter_by_recency(papers: Vec<Paper>, days_back: u32, now: DateTime<Utc>) -> Vec<Paper> {
    let cutoff = now - TimeDelta::days(i64::from(days_back));
    papers.into_iter().filter(|p| p.published_at.is_some_and(|at| at >= cutoff)).collect()
}

impl Entry {
    fn into_paper(self) -> Paper {
        let (published_at, published_display) = parse_published(self.published.as_deref());

        Paper {
            title: single_line(self.title.as_deref()),
            authors: self
                .authors
                .into_iter()
                .filter_map(|a| a.name.map(|n| n.trim().to_string()))
                .filter(|n| !n.is_empty())
                .collect(),
            r#abstract: single_line(self.summary.as_deref()),
            published_at,
            published_display,
            source_id: non_blank(self.id.as_deref()).unwrap_or(MISSING).to_string(),
            categories: self
                .categories
                .into_iter()
                .filter_map(|c| c.term)
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn single_line(text: Option<&str>) -> String {
    non_blank(text).map_or_else(|| MISSING.to_string(), |t| LINE_BREAKS.replace_all(t, " ").into_owned())
}

fn parse_published(raw: Option<&str>) -> (Option<DateTime<Utc>>, String) {
    let Some(raw) = non_blank(raw) else {
        return (None, MISSING.to_string());
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => {
            let utc = parsed.with_timezone(&Utc);
            (Some(utc), utc.format(DISPLAY_FORMAT).to_string())
        }
        Err(err) => {
            tracing::debug!(raw, error = %err, "Unparsable published date");
            (None, raw.to_string())
        }
    }
}
