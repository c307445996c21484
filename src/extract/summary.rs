//! Event landing page extraction
//!
//! The landing page carries the event's name, a footer block of labeled
//! aggregate stats, and zero or more record blocks (course records and the
//! like). The stats are schema-less on the source side, so they are kept as
//! an open label -> value mapping instead of a fixed struct.

use crate::extract::{selector, ExtractError};
use scraper::{ElementRef, Html};
use std::collections::HashMap;

const HEADING_SELECTOR: &str = "h1.paddetandb";
const STAT_SELECTOR: &str = "div.aStat";
const RECORD_SELECTOR: &str = "div.records";

/// Identity and state snapshot of the monitored event
///
/// Taken once per session from the event's landing page and not refreshed
/// afterwards.
#[derive(Debug, Clone)]
pub struct EventSummary {
    /// Human-readable event name
    pub event_name: String,

    /// Most recent completed event sequence number at summary time
    pub last_event_no: u32,

    /// Aggregate stats and named records, keyed by the label the page shows
    pub stats: HashMap<String, String>,
}

/// Extracts the event summary from a landing page document
///
/// The heading, the stats block, and a numeric "Events" stat are hard
/// requirements; record blocks are merged into the stats mapping key by key,
/// last write wins.
///
/// # Arguments
///
/// * `doc` - The parsed landing page
///
/// # Returns
///
/// * `Ok(EventSummary)` - Successfully extracted summary
/// * `Err(ExtractError)` - A required element or stat was missing or malformed
pub fn extract_summary(doc: &Html) -> Result<EventSummary, ExtractError> {
    let heading_sel = selector(HEADING_SELECTOR)?;
    let event_name = doc
        .select(&heading_sel)
        .next()
        .map(collapse_text)
        .ok_or(ExtractError::MissingElement {
            selector: HEADING_SELECTOR,
        })?;

    let mut stats = extract_stats(doc)?;
    merge_records(doc, &mut stats)?;

    let events = stats
        .get("Events")
        .ok_or(ExtractError::MissingStat { label: "Events" })?;
    let last_event_no = events
        .parse::<u32>()
        .map_err(|_| ExtractError::BadNumber {
            field: "Events",
            value: events.clone(),
        })?;

    Ok(EventSummary {
        event_name,
        last_event_no,
        stats,
    })
}

/// Parses the labeled stats block into a label -> value mapping
fn extract_stats(doc: &Html) -> Result<HashMap<String, String>, ExtractError> {
    let stat_sel = selector(STAT_SELECTOR)?;
    let mut stats = HashMap::new();

    for stat in doc.select(&stat_sel) {
        let text = collapse_text(stat);
        let (label, value) = text
            .split_once(": ")
            .ok_or_else(|| ExtractError::MalformedStat { text: text.clone() })?;
        stats.insert(label.trim().to_string(), value.trim().to_string());
    }

    if stats.is_empty() {
        return Err(ExtractError::MissingElement {
            selector: STAT_SELECTOR,
        });
    }

    Ok(stats)
}

/// Folds the record blocks into the stats mapping
///
/// Each record block holds a pair of spans: the record type (with a trailing
/// colon) and its details. A record whose type collides with an existing
/// stats key overwrites it.
fn merge_records(doc: &Html, stats: &mut HashMap<String, String>) -> Result<(), ExtractError> {
    let record_sel = selector(RECORD_SELECTOR)?;
    let span_sel = selector("span")?;

    for block in doc.select(&record_sel) {
        let mut spans = block.select(&span_sel);
        let record_type = spans.next().ok_or(ExtractError::MissingElement {
            selector: "div.records span",
        })?;
        let record_details = spans.next().ok_or(ExtractError::MissingElement {
            selector: "div.records span",
        })?;

        let record_type = collapse_text(record_type).replace(':', "");
        stats.insert(record_type.trim().to_string(), collapse_text(record_details));
    }

    Ok(())
}

/// Collects an element's text, trimmed and with embedded newlines removed
fn collapse_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .trim()
        .replace('\n', "")
}
