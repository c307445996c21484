//! Data model for accumulated results
//!
//! # Components
//!
//! - `ResultRecord`: one participant's outcome in one event instance
//! - `Runner`: identified runner with details, or an anonymized row
//! - `Dataset`: the running table of records plus the fetched-event set

mod accumulator;
mod record;

pub use accumulator::Dataset;
pub use record::{ResultRecord, Runner, RunnerDetails, UNKNOWN_NAME};
