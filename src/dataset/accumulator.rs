use crate::dataset::ResultRecord;
use std::collections::BTreeSet;

/// Accumulated results table across all fetched event instances
///
/// Owns both the running table of records and the set of event numbers whose
/// results are already in it. The two only ever change together: `merge`
/// appends an event's rows and marks its number fetched in one step, so an
/// event number is in the fetched set exactly when its rows are in the table.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<ResultRecord>,
    fetched: BTreeSet<u32>,
}

impl Dataset {
    /// Creates an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event's records and marks the event number as fetched
    ///
    /// Callers must only pass fully extracted events; an event whose
    /// extraction failed never reaches this method.
    pub fn merge(&mut self, event_no: u32, records: Vec<ResultRecord>) {
        tracing::debug!(
            "Merging {} records for event #{}",
            records.len(),
            event_no
        );
        self.records.extend(records);
        self.fetched.insert(event_no);
    }

    /// Read snapshot of all accumulated records, in fetch order
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Event numbers already fetched in this session
    pub fn fetched(&self) -> &BTreeSet<u32> {
        &self.fetched
    }

    /// Whether the given event number has already been merged
    pub fn is_fetched(&self, event_no: u32) -> bool {
        self.fetched.contains(&event_no)
    }

    /// Total number of accumulated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
