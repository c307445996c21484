//! Page fetching
//!
//! The fetch capability is a trait so the session can be driven against
//! canned documents in tests; production uses an HTTP client. A fetcher is
//! an exclusively-owned resource: `fetch` takes `&mut self` because each
//! call replaces the session's notion of the current page, and one fetcher
//! must never serve two sessions at once.

use crate::config::UserAgentConfig;
use crate::{ParkError, Result};
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

/// Capability to retrieve a URL's rendered markup as a document tree
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Navigates to `url` and returns the parsed document
    ///
    /// Failures are fatal for the operation in progress; no retrying happens
    /// at this layer.
    async fn fetch(&mut self, url: &str) -> Result<Html>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &UserAgentConfig) -> std::result::Result<Client, reqwest::Error> {
    // Format: CrawlerName/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by a reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher identifying itself with the given user agent config
    pub fn new(config: &UserAgentConfig) -> Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&mut self, url: &str) -> Result<Html> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ParkError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParkError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| ParkError::Http {
            url: url.to_string(),
            source,
        })?;

        Ok(Html::parse_document(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestScraper".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_new_http_fetcher() {
        let config = create_test_config();
        assert!(HttpFetcher::new(&config).is_ok());
    }

    // Fetch behavior against a live server is covered by the wiremock
    // integration tests.
}
