//! Paper data model, normalized from arXiv Atom entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for text fields the source left out.
pub const MISSING: &str = "N/A";

/// Authors shown before the list is shortened to "et al.".
const AUTHORS_SHOWN: usize = 3;

/// A research paper retrieved from arXiv.
///
/// Produced once by the client and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Single-line title.
    pub title: String,

    /// Author names in source order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Single-line abstract.
    pub r#abstract: String,

    /// Publication timestamp, absent when missing or unparsable.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Date string for display.
    pub published_display: String,

    /// Source identifier, usually the abstract page URL.
    pub source_id: String,

    /// Category codes in source order.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Paper {
    /// Outbound link to the paper on arXiv.
    #[must_use]
    pub fn link(&self) -> String {
        let points_at_arxiv = url::Url::parse(&self.source_id)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.ends_with("arxiv.org")))
            .unwrap_or(false);

        if points_at_arxiv {
            self.source_id.clone()
        } else {
            format!("https://arxiv.org/abs/{}", self.source_id)
        }
    }

    /// Comma-separated author names, shortened with "et al." past three.
    #[must_use]
    pub fn author_line(&self) -> String {
        if self.authors.len() > AUTHORS_SHOWN {
            format!("{} et al.", self.authors[..AUTHORS_SHOWN].join(", "))
        } else {
            self.authors.join(", ")
        }
    }

    /// Check whether the paper is tagged with a category code.
    #[must_use]
    pub fn has_category(&self, code: &str) -> bool {
        self.categories.iter().any(|c| c == code)
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            title: MISSING.to_string(),
            authors: Vec::new(),
            r#abstract: MISSING.to_string(),
            published_at: None,
            published_display: MISSING.to_string(),
            source_id: MISSING.to_string(),
            categories: Vec::new(),
        }
    }
}
