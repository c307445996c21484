//! URL construction for one event's pages

use crate::{ParkError, Result};
use url::Url;

/// Source URLs of a single monitored event
///
/// Built once per session from the configured base URL and the event id, so
/// the rest of the session never string-formats URLs.
#[derive(Debug, Clone)]
pub struct EventUrls {
    homepage: String,
    results_prefix: String,
}

impl EventUrls {
    /// Validates the event id and base URL and builds the page URLs
    ///
    /// The event id must be usable as a single path segment, exactly as it
    /// appears in the source site's URLs.
    pub fn new(base_url: &str, event_id: &str) -> Result<Self> {
        if event_id.is_empty()
            || !event_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ParkError::InvalidEventId(event_id.to_string()));
        }

        // Parse to validate; the stored URLs are plain strings
        let base = Url::parse(base_url)?;
        let base = base.as_str().trim_end_matches('/');

        Ok(Self {
            homepage: format!("{}/{}/", base, event_id),
            results_prefix: format!("{}/{}/results/", base, event_id),
        })
    }

    /// The event's landing page
    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    /// The results page for one event instance
    pub fn results(&self, event_no: u32) -> String {
        format!("{}{}", self.results_prefix, event_no)
    }
}
