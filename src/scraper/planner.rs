//! Fetch planning
//!
//! Given what the caller asked for and what the session already holds,
//! compute the exact set of event numbers still worth fetching. The plan is
//! ordered ascending so repeated runs are reproducible.

use std::collections::BTreeSet;

/// Number of most recent events fetched when no explicit request is given
pub const DEFAULT_LAST_EVENTS: u32 = 12;

/// What to fetch: an explicit inclusive range, or the most recent N events
///
/// The two forms are distinct variants rather than optional fields, so
/// "range provided" is never inferred from sentinel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    /// All events with `from_event <= event_no <= to_event`
    Range { from_event: u32, to_event: u32 },

    /// The N most recent events
    LastN(u32),
}

impl Default for FetchRequest {
    fn default() -> Self {
        FetchRequest::LastN(DEFAULT_LAST_EVENTS)
    }
}

/// Computes the set of event numbers to fetch
///
/// The candidate set from the request is reduced by the already-fetched set
/// and by anything beyond the latest known completed event; candidates below
/// event 1 cannot exist and are dropped the same way. An empty plan means
/// there is nothing to do, not that anything went wrong.
///
/// # Arguments
///
/// * `fetched` - Event numbers already retrieved this session
/// * `last_event_no` - Most recent completed event number
/// * `request` - The caller's fetch request
///
/// # Returns
///
/// The event numbers to fetch, in ascending order
pub fn plan(fetched: &BTreeSet<u32>, last_event_no: u32, request: FetchRequest) -> BTreeSet<u32> {
    let candidates: BTreeSet<u32> = match request {
        FetchRequest::Range {
            from_event,
            to_event,
        } => (from_event..=to_event).collect(),
        FetchRequest::LastN(n) => (0..n)
            .filter_map(|i| last_event_no.checked_sub(i))
            .collect(),
    };

    candidates
        .into_iter()
        .filter(|event_no| *event_no >= 1 && *event_no <= last_event_no)
        .filter(|event_no| !fetched.contains(event_no))
        .collect()
}
