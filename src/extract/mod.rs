//! Extraction of structured records from fetched pages
//!
//! This module turns rendered markup into the data model:
//! - `summary`: event landing page -> `EventSummary`
//! - `results`: one event's results page -> `ResultRecord` rows
//!
//! Extraction is all-or-nothing per page: a required element or attribute
//! that is missing fails the whole call, so no partially parsed event ever
//! reaches the dataset.

mod results;
mod summary;

pub use results::extract_results;
pub use summary::{extract_summary, EventSummary};

use scraper::Selector;
use thiserror::Error;

/// Errors raised while extracting structured data from a page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("required element not found: {selector}")]
    MissingElement { selector: &'static str },

    #[error("required attribute missing: {attr}")]
    MissingAttribute { attr: &'static str },

    #[error("malformed stat entry: '{text}'")]
    MalformedStat { text: String },

    #[error("summary stats are missing the '{label}' entry")]
    MissingStat { label: &'static str },

    #[error("{field} is not a number: '{value}'")]
    BadNumber { field: &'static str, value: String },

    #[error("invalid selector: {selector}")]
    InvalidSelector { selector: &'static str },
}

/// Parses a CSS selector, mapping the (static) parse failure into the
/// extraction error space
pub(crate) fn selector(sel: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(sel).map_err(|_| ExtractError::InvalidSelector { selector: sel })
}
