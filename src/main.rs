//! Park-Report main entry point
//!
//! Command-line interface for scraping one event's historical results into
//! the dataset file the dashboard reads.

use anyhow::Context;
use clap::Parser;
use park_report::config::{default_config, load_config_with_hash, Config};
use park_report::output::{dataset_path, write_dataset};
use park_report::scraper::{FetchRequest, ScraperSession, DEFAULT_LAST_EVENTS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Park-Report: a polite results scraper for a recurring community run
///
/// Fetches an event's landing page and the results pages it still misses,
/// accumulates them into one table, and writes a per-event CSV dataset.
/// It refuses to run on the event's own day unless told otherwise.
#[derive(Parser, Debug)]
#[command(name = "park-report")]
#[command(version)]
#[command(about = "A polite results scraper for a recurring community run", long_about = None)]
struct Cli {
    /// Event id exactly as it appears in the results site URL
    #[arg(value_name = "EVENT_ID")]
    event_id: String,

    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// First event number of an explicit range (inclusive)
    #[arg(long, value_name = "N", requires = "to_event", conflicts_with = "last_events")]
    from_event: Option<u32>,

    /// Last event number of an explicit range (inclusive)
    #[arg(long, value_name = "N", requires = "from_event", conflicts_with = "last_events")]
    to_event: Option<u32>,

    /// Number of most recent events to fetch instead of a range
    #[arg(long, value_name = "N")]
    last_events: Option<u32>,

    /// Directory for the dataset file (overrides the config)
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Scrape even on the event's own day
    #[arg(long)]
    ignore_event_day: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn fetch_request(&self) -> FetchRequest {
        match (self.from_event, self.to_event) {
            (Some(from_event), Some(to_event)) => FetchRequest::Range {
                from_event,
                to_event,
            },
            _ => FetchRequest::LastN(self.last_events.unwrap_or(DEFAULT_LAST_EVENTS)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => default_config().context("built-in defaults failed validation")?,
    };

    if cli.ignore_event_day {
        config.scraper.ignore_event_day = true;
    }

    let request = cli.fetch_request();
    run_scrape(&cli, config, request).await
}

/// Opens the session, fetches what the request needs, and writes the dataset
///
/// Partial progress survives a mid-run failure: whatever was merged before
/// the error is still written out before the error is reported.
async fn run_scrape(cli: &Cli, config: Config, request: FetchRequest) -> anyhow::Result<()> {
    let mut session = ScraperSession::connect(&cli.event_id, &config).await?;

    println!("Event:       {}", session.summary().event_name);
    println!("Events held: {}", session.summary().last_event_no);

    let outcome = session.fetch_results(request).await;

    if !session.get_results().is_empty() {
        let dataset_dir = cli
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output.dataset_dir));
        let path = dataset_path(&dataset_dir, &cli.event_id);
        write_dataset(&path, session.get_results())
            .with_context(|| format!("failed to write {}", path.display()))?;

        println!("Rows:        {}", session.get_results().len());
        println!("✓ Dataset written to: {}", path.display());
    }

    match outcome {
        Ok(merged) => {
            println!("✓ Merged {} new events", merged);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "Run stopped early with {} events merged: {}",
                session.fetched_events().len(),
                e
            );
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("park_report=info,warn"),
            1 => EnvFilter::new("park_report=debug,info"),
            2 => EnvFilter::new("park_report=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
