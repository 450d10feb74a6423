//! Configuration for the Daily AI Research Feed.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv export API query endpoint.
    pub const QUERY_URL: &str = "http://export.arxiv.org/api/query";

    /// Request timeout for the single fetch per refresh.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cache TTL (30 minutes).
    pub const CACHE_TTL: Duration = Duration::from_secs(30 * 60);

    /// Recency window in days.
    pub const DAYS_BACK: u32 = 2;

    /// Result cap per fetch.
    pub const MAX_RESULTS: u32 = 100;

    /// User agent sent to arXiv.
    pub const USER_AGENT: &str = concat!("daily-ai-feed/", env!("CARGO_PKG_VERSION"));
}

/// Search terms for the AI feed.
pub mod query {
    /// AI-related arXiv subject categories.
    pub const CATEGORIES: &[&str] = &["cs.AI", "cs.LG", "cs.CL", "cs.CV", "cs.NE", "stat.ML"];

    /// Broad keyword terms, already in arXiv `all:` syntax.
    pub const KEYWORDS: &[&str] = &[
        "all:artificial+intelligence",
        "all:machine+learning",
        "all:deep+learning",
        "all:neural+network",
    ];
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query endpoint (overridable for mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// How long a fetched list stays valid.
    pub cache_ttl: Duration,

    /// Recency window for fetched papers.
    pub days_back: u32,

    /// Result cap per fetch.
    pub max_results: u32,
}

impl Config {
    /// Create a configuration with the given cache TTL and defaults elsewhere.
    #[must_use]
    pub fn new(cache_ttl: Duration) -> Self {
        Self { cache_ttl, ..Self::default() }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_url: format!("{}/api/query", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `ARXIV_API_URL`, `CACHE_TTL_MINUTES`, `FETCH_DAYS_BACK` and
    /// `FETCH_MAX_RESULTS`; unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a numeric variable does not parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("ARXIV_API_URL") {
            config.api_url = url;
        }
        if let Ok(minutes) = std::env::var("CACHE_TTL_MINUTES") {
            let minutes: u64 = minutes.parse().context("CACHE_TTL_MINUTES must be an integer")?;
            config.cache_ttl = Self::ttl_from_minutes(minutes).context("CACHE_TTL_MINUTES is too large")?;
        }
        if let Ok(days) = std::env::var("FETCH_DAYS_BACK") {
            config.days_back = days.parse().context("FETCH_DAYS_BACK must be an integer")?;
        }
        if let Ok(max) = std::env::var("FETCH_MAX_RESULTS") {
            config.max_results = max.parse().context("FETCH_MAX_RESULTS must be an integer")?;
        }

        Ok(config)
    }

    /// Convert a TTL in minutes, or `None` if the seconds overflow `u64`.
    #[must_use]
    pub fn ttl_from_minutes(minutes: u64) -> Option<Duration> {
        minutes.checked_mul(60).map(Duration::from_secs)
    }

    /// Cache TTL in whole minutes.
    #[must_use]
    pub const fn cache_ttl_minutes(&self) -> u64 {
        self.cache_ttl.as_secs() / 60
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: api::QUERY_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            cache_ttl: api::CACHE_TTL,
            days_back: api::DAYS_BACK,
            max_results: api::MAX_RESULTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_url, api::QUERY_URL);
        assert_eq!(config.cache_ttl_minutes(), 30);
        assert_eq!(config.days_back, 2);
        assert_eq!(config.max_results, 100);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_new_sets_ttl() {
        let config = Config::new(Duration::from_secs(600));
        assert_eq!(config.cache_ttl_minutes(), 10);
        assert_eq!(config.days_back, api::DAYS_BACK);
    }

    #[test]
    fn test_ttl_from_minutes() {
        assert_eq!(Config::ttl_from_minutes(30), Some(Duration::from_secs(1800)));
        assert_eq!(Config::ttl_from_minutes(0), Some(Duration::ZERO));
        assert_eq!(Config::ttl_from_minutes(u64::MAX / 60), Some(Duration::from_secs(u64::MAX / 60 * 60)));
        assert_eq!(Config::ttl_from_minutes(u64::MAX), None);
    }

    #[test]
    fn test_config_for_testing_url() {
        let config = Config::for_testing("http://127.0.0.1:4000/");
        assert_eq!(config.api_url, "http://127.0.0.1:4000/api/query");
    }

    #[test]
    fn test_query_terms() {
        assert!(query::CATEGORIES.contains(&"stat.ML"));
        assert!(query::KEYWORDS.iter().all(|k| k.starts_with("all:")));
    }
}
