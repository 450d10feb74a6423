//! Daily AI Research Feed
//!
//! Fetches recent AI papers from the arXiv API, keeps them in a single-slot
//! in-memory cache, and serves them as a filterable web page.
//!
//! # Features
//!
//! - **One fetch per refresh**: a single arXiv query, no retries
//! - **Cached**: 30-minute TTL, invalidated when the calendar day changes
//! - **Degrades quietly**: network and parse failures yield empty or cached data
//! - **Testable time**: cache freshness runs on an injectable [`clock::Clock`]
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use daily_ai_feed::{ArxivClient, Config, PaperService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ArxivClient::new(&config)?;
//!     let service = PaperService::new(Arc::new(client), &config);
//!
//!     let papers = service.papers().await;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod service;

pub use cache::PaperCache;
pub use client::{ArxivClient, FetchOutcome, PaperSource};
pub use config::Config;
pub use error::{ClientError, SourceError};
pub use service::PaperService;
