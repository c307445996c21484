//! Park-Report: a polite results scraper for a recurring community run
//!
//! This crate incrementally builds a historical results dataset for one
//! parkrun-style event by fetching and parsing its public results pages,
//! while staying off the source site on event day and pacing every request.

pub mod config;
pub mod dataset;
pub mod extract;
pub mod output;
pub mod scraper;

use thiserror::Error;

/// Main error type for Park-Report operations
#[derive(Debug, Error)]
pub enum ParkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("today is event day ({weekday}); scraping is paused until tomorrow (pass --ignore-event-day to override)")]
    EventDay { weekday: chrono::Weekday },

    #[error("invalid event id '{0}': expected the path segment of the event's results URL")]
    InvalidEventId(String),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Extraction error: {0}")]
    Extract(#[from] extract::ExtractError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Park-Report operations
pub type Result<T> = std::result::Result<T, ParkError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use dataset::{Dataset, ResultRecord, Runner, RunnerDetails};
pub use extract::EventSummary;
pub use scraper::{FetchRequest, HttpFetcher, PageFetcher, ScraperSession};
