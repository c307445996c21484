//! Configuration module for Park-Report
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a built-in default, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use park_report::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping {} with a {}ms delay", config.scraper.base_url, config.scraper.page_delay);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScraperConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, default_config, load_config, load_config_with_hash};

// Re-export validation helpers
pub use validation::{parse_event_day, validate};
