//! Courtesy policy toward the source site
//!
//! Two rules: never scrape on the day the event actually runs (the site is
//! under real load then), and leave a fixed delay between consecutive page
//! fetches. The day check reads an injected clock rather than the ambient
//! system time.

use crate::config::{parse_event_day, ScraperConfig};
use crate::{ParkError, Result};
use chrono::{Datelike, NaiveDate, Weekday};
use std::time::Duration;

/// Source of "today" for the event-day gate
pub trait Clock {
    /// The current local date
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Startup gate and inter-request pacing
#[derive(Debug, Clone)]
pub struct PolitenessGuard {
    event_day: Weekday,
    ignore_event_day: bool,
    page_delay: Duration,
}

impl PolitenessGuard {
    /// Builds the guard from the scraper configuration
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let event_day = parse_event_day(&config.event_day)?;
        Ok(Self {
            event_day,
            ignore_event_day: config.ignore_event_day,
            page_delay: Duration::from_millis(config.page_delay),
        })
    }

    /// Whether scraping may start today
    pub fn may_start(&self, clock: &impl Clock) -> bool {
        self.ignore_event_day || clock.today().weekday() != self.event_day
    }

    /// Enforces the event-day gate
    ///
    /// This is a hard startup precondition: a refusal is not retryable within
    /// the same session.
    pub fn check(&self, clock: &impl Clock) -> Result<()> {
        if self.may_start(clock) {
            Ok(())
        } else {
            Err(ParkError::EventDay {
                weekday: self.event_day,
            })
        }
    }

    /// Sleeps for the configured delay; called once per page fetch
    pub async fn pace(&self) {
        tokio::time::sleep(self.page_delay).await;
    }

    /// The configured inter-request delay
    pub fn page_delay(&self) -> Duration {
        self.page_delay
    }
}
