/// Name the source site substitutes for runners who opted out of results
pub const UNKNOWN_NAME: &str = "Unknown";

/// One participant's outcome in one event instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// Sequence number of the event instance this result belongs to
    pub event_no: u32,

    /// Finishing rank within the event
    pub position: u32,

    /// The runner, identified or anonymized
    pub runner: Runner,
}

/// A results-row participant
///
/// The source site withholds every detail field for anonymized rows, so the
/// details only exist together with an identity. A record is never partially
/// detailed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runner {
    /// Runner with a public profile and full detail set
    Identified(RunnerDetails),

    /// Runner whose identity is withheld; no detail fields exist
    Unknown,
}

/// Detail fields of an identified runner, as given by the source page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerDetails {
    /// Display name
    pub name: String,

    /// Stable per-person identifier, taken from the profile link
    pub parkrun_id: String,

    /// Finish time, kept in the form the page gives it (e.g. "19:04")
    pub time: String,

    /// Achievement marker for this run (e.g. "New PB!"), may be empty
    pub achievement: String,

    /// Age-graded performance percentage, as given (e.g. "62.34 %")
    pub age_grade: String,

    /// Age group category (e.g. "SM30-34")
    pub age_group: String,

    /// Club affiliation, may be empty
    pub club: String,

    /// Gender as listed by the source
    pub gender: String,

    /// Lifetime participation count, as given
    pub runs: String,
}

impl ResultRecord {
    /// Display name of the participant ("Unknown" for anonymized rows)
    pub fn name(&self) -> &str {
        match &self.runner {
            Runner::Identified(details) => &details.name,
            Runner::Unknown => UNKNOWN_NAME,
        }
    }

    /// Whether this row is anonymized
    pub fn is_unknown(&self) -> bool {
        matches!(self.runner, Runner::Unknown)
    }
}
