//! arXiv API client.
//!
//! Provides:
//! - Query construction for the AI category/keyword feed
//! - A single GET per refresh with a bounded timeout (no retries)
//! - Atom parsing with per-field defaults
//! - Recency filtering
//!
//! Failures are logged here and returned as a tagged [`FetchOutcome`], never
//! raised to the caller.

mod feed;

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;

pub use feed::{filter_by_recency, parse_feed};

use crate::config::{Config, api, query};
use crate::error::{ClientError, ClientResult, SourceError};
use crate::models::Paper;

/// Result of one trip to the paper source.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The source answered; the list may be empty.
    Fetched(Vec<Paper>),

    /// No data: network, status or parse failure.
    Unavailable(ClientError),
}

impl FetchOutcome {
    /// Papers, treating an unavailable source as an empty list.
    #[must_use]
    pub fn into_papers(self) -> Vec<Paper> {
        match self {
            Self::Fetched(papers) => papers,
            Self::Unavailable(_) => Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}

/// Anything that can produce recent papers for the service.
#[async_trait::async_trait]
pub trait PaperSource: Send + Sync {
    /// Fetch papers from the last `days_back` days, at most `max_results`.
    ///
    /// `Err` is reserved for unexpected faults; ordinary "no data" conditions
    /// come back as [`FetchOutcome::Unavailable`].
    async fn recent_papers(
        &self,
        days_back: u32,
        max_results: u32,
    ) -> Result<FetchOutcome, SourceError>;
}

/// arXiv export API client.
#[derive(Clone)]
pub struct ArxivClient {
    /// HTTP client.
    client: Client,

    /// Query endpoint.
    api_url: String,

    /// Request timeout, kept for error reporting.
    request_timeout: Duration,
}

impl ArxivClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(api::USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            request_timeout: config.request_timeout,
        })
    }

    /// Query endpoint this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Build the search expression: any AI category, or any AI keyword.
    ///
    /// The recency window is applied after parsing, so `days_back` does not
    /// change the expression.
    #[must_use]
    pub fn build_query(_days_back: u32) -> String {
        let categories =
            query::CATEGORIES.iter().map(|c| format!("cat:{c}")).collect::<Vec<_>>().join(" OR ");
        let keywords = query::KEYWORDS.join(" OR ");

        format!("({categories}) OR ({keywords})")
    }

    /// Fetch the raw Atom document, newest submissions first.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout or non-2xx status.
    pub async fn fetch_raw(&self, max_results: u32, days_back: u32) -> ClientResult<String> {
        let search_query = Self::build_query(days_back);
        let max_results = max_results.to_string();

        let params = [
            ("search_query", search_query.as_str()),
            ("start", "0"),
            ("max_results", max_results.as_str()),
            ("sortBy", "submittedDate"),
            ("sortOrder", "descending"),
        ];

        tracing::debug!(url = %self.api_url, query = %search_query, "Requesting arXiv feed");

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.request_timeout))?;

        let response = Self::handle_response(response).await?;
        response.text().await.map_err(|e| ClientError::from_transport(e, self.request_timeout))
    }

    /// Fetch, parse and filter recent AI papers.
    pub async fn get_recent_papers(&self, days_back: u32, max_results: u32) -> FetchOutcome {
        tracing::info!(days_back, max_results, "Fetching AI papers from arXiv");

        let xml = match self.fetch_raw(max_results, days_back).await {
            Ok(xml) => xml,
            Err(err) => {
                tracing::warn!(error = %err, transient = err.is_transient(), "Error fetching data from arXiv");
                return FetchOutcome::Unavailable(err);
            }
        };

        let papers = match parse_feed(&xml) {
            Ok(papers) => papers,
            Err(err) => {
                tracing::error!(error = %err, "Error parsing arXiv response");
                return FetchOutcome::Unavailable(err);
            }
        };

        if papers.is_empty() {
            tracing::info!("No papers found in arXiv response");
            return FetchOutcome::Fetched(papers);
        }

        let parsed = papers.len();
        let recent = filter_by_recency(papers, days_back, Utc::now());
        tracing::info!(parsed, recent = recent.len(), days_back, "Found recent AI papers");

        FetchOutcome::Fetched(recent)
    }

    /// Map non-success status codes to errors.
    async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            code => Err(ClientError::UnexpectedStatus { status: code, message: text }),
        }
    }
}

#[async_trait::async_trait]
impl PaperSource for ArxivClient {
    async fn recent_papers(
        &self,
        days_back: u32,
        max_results: u32,
    ) -> Result<FetchOutcome, SourceError> {
        Ok(self.get_recent_papers(days_back, max_results).await)
    }
}

impl std::fmt::Debug for ArxivClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArxivClient").field("api_url", &self.api_url).finish()
    }
}
