//! Output module: the dataset handoff file
//!
//! The dashboard consumes one flat CSV per event id. Columns mirror the
//! record fields; detail columns are left empty for anonymized rows rather
//! than filled with placeholders.

mod csv;

use crate::dataset::{ResultRecord, Runner};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Column order of the dataset file
const COLUMNS: [&str; 11] = [
    "event_no",
    "name",
    "position",
    "parkrun_id",
    "time",
    "achievement",
    "age_grade",
    "age_group",
    "club",
    "gender",
    "runs",
];

/// Path of the dataset file for one event id
pub fn dataset_path(dataset_dir: &Path, event_id: &str) -> PathBuf {
    dataset_dir.join(format!("{}.csv", event_id))
}

/// Writes the accumulated records to a CSV dataset file
///
/// Creates the parent directory if needed and overwrites any existing file.
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `records` - The records to write, in dataset order
pub fn write_dataset(path: &Path, records: &[ResultRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);

    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    csv::write_row(&mut writer, &header)?;

    for record in records {
        csv::write_row(&mut writer, &record_row(record))?;
    }

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Shapes one record into its CSV row
fn record_row(record: &ResultRecord) -> Vec<String> {
    match &record.runner {
        Runner::Identified(details) => vec![
            record.event_no.to_string(),
            details.name.clone(),
            record.position.to_string(),
            details.parkrun_id.clone(),
            details.time.clone(),
            details.achievement.clone(),
            details.age_grade.clone(),
            details.age_group.clone(),
            details.club.clone(),
            details.gender.clone(),
            details.runs.clone(),
        ],
        Runner::Unknown => {
            let mut row = vec![
                record.event_no.to_string(),
                record.name().to_string(),
                record.position.to_string(),
            ];
            row.resize(COLUMNS.len(), String::new());
            row
        }
    }
}
