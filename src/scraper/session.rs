//! Scraper session orchestration
//!
//! A session composes the politeness guard, the fetcher, the planner, the
//! extractors, and the dataset accumulator. Opening a session fetches and
//! parses the event's landing page; each `fetch_results` call then plans the
//! still-missing event numbers and retrieves them one page at a time.
//!
//! The session is strictly sequential. The fetcher is owned by exactly one
//! session and mutated in place, so fetches are never issued concurrently.

use crate::config::Config;
use crate::dataset::{Dataset, ResultRecord};
use crate::extract::{extract_results, extract_summary, EventSummary};
use crate::scraper::planner::{plan, FetchRequest};
use crate::scraper::politeness::{Clock, PolitenessGuard, SystemClock};
use crate::scraper::urls::EventUrls;
use crate::scraper::{HttpFetcher, PageFetcher};
use crate::Result;
use std::collections::BTreeSet;

/// A scraping session for one event
///
/// Holds the event summary taken at construction time, the accumulated
/// dataset, and the set of event numbers already fetched. Results are only
/// exposed as read snapshots.
pub struct ScraperSession<F> {
    event_id: String,
    urls: EventUrls,
    guard: PolitenessGuard,
    fetcher: F,
    summary: EventSummary,
    dataset: Dataset,
}

impl ScraperSession<HttpFetcher> {
    /// Opens a session over HTTP using the system clock
    ///
    /// This is the production entry point; see [`ScraperSession::open`] for
    /// the injectable variant used in tests.
    pub async fn connect(event_id: &str, config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.user_agent)?;
        Self::open(event_id, config, fetcher, &SystemClock).await
    }
}

impl<F: PageFetcher> ScraperSession<F> {
    /// Opens a session with an explicit fetcher and clock
    ///
    /// Construction succeeds iff the politeness gate allows starting today
    /// and the event's landing page fetches and parses. Any failure leaves
    /// no usable session behind.
    pub async fn open(
        event_id: &str,
        config: &Config,
        mut fetcher: F,
        clock: &impl Clock,
    ) -> Result<Self> {
        let guard = PolitenessGuard::from_config(&config.scraper)?;
        guard.check(clock)?;

        let urls = EventUrls::new(&config.scraper.base_url, event_id)?;

        guard.pace().await;
        let doc = fetcher.fetch(urls.homepage()).await?;
        let summary = extract_summary(&doc)?;

        tracing::info!(
            "Opened session for '{}' ({}), {} events so far",
            summary.event_name,
            event_id,
            summary.last_event_no
        );

        Ok(Self {
            event_id: event_id.to_string(),
            urls,
            guard,
            fetcher,
            summary,
            dataset: Dataset::new(),
        })
    }

    /// Fetches the results pages the request still needs and merges them in
    ///
    /// Events are processed in ascending order. Each event is paced, fetched,
    /// extracted, and merged as a unit; the first unrecovered failure aborts
    /// the remaining plan but keeps everything merged so far. An empty plan
    /// performs zero fetches.
    ///
    /// # Arguments
    ///
    /// * `request` - Explicit range or "last N" count
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of newly merged events
    /// * `Err(ParkError)` - A fetch or extraction failed; prior merges remain
    pub async fn fetch_results(&mut self, request: FetchRequest) -> Result<usize> {
        let planned = plan(self.dataset.fetched(), self.summary.last_event_no, request);

        if planned.is_empty() {
            tracing::info!("Nothing new to fetch for '{}'", self.event_id);
            return Ok(0);
        }

        tracing::info!(
            "Fetching {} events for '{}': {:?}",
            planned.len(),
            self.event_id,
            planned
        );

        let mut merged = 0;
        for event_no in planned {
            self.guard.pace().await;

            let url = self.urls.results(event_no);
            let doc = self.fetcher.fetch(&url).await?;
            let records = extract_results(&doc, event_no)?;

            tracing::info!("Event #{}: {} results", event_no, records.len());
            self.dataset.merge(event_no, records);
            merged += 1;
        }

        Ok(merged)
    }

    /// Read snapshot of the accumulated dataset, in fetch order
    pub fn get_results(&self) -> &[ResultRecord] {
        self.dataset.records()
    }

    /// Event numbers fetched so far in this session
    pub fn fetched_events(&self) -> &BTreeSet<u32> {
        self.dataset.fetched()
    }

    /// Summary snapshot taken when the session was opened
    pub fn summary(&self) -> &EventSummary {
        &self.summary
    }

    /// The event id this session scrapes
    pub fn event_id(&self) -> &str {
        &self.event_id
    }
}
