use serde::Deserialize;

/// Main configuration structure for Park-Report
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Base URL of the results site
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Minimum time between page fetches (milliseconds)
    #[serde(rename = "page-delay")]
    pub page_delay: u64,

    /// Weekday the event takes place on; scraping is refused on that day
    #[serde(rename = "event-day")]
    pub event_day: String,

    /// Disable the event-day gate
    #[serde(rename = "ignore-event-day")]
    pub ignore_event_day: bool,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the per-event dataset files are written to
    #[serde(rename = "dataset-dir")]
    pub dataset_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.parkrun.org.uk".to_string(),
            page_delay: 1000,
            event_day: "saturday".to_string(),
            ignore_event_day: false,
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "ParkReport".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/park-report/park-report".to_string(),
            contact_email: "hello@park-report.dev".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dataset_dir: "./data".to_string(),
        }
    }
}
