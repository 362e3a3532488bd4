//! CSV export of scraped datasets

use crate::catalog::normalize_spacing;
use crate::model::ListingRecord;
use crate::output::ExportResult;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `records` as CSV with a header row equal to [`ListingRecord::COLUMNS`]
///
/// The header is written even when there are no records.
pub fn write_csv<W: Write>(writer: W, records: &[ListingRecord]) -> ExportResult<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(ListingRecord::COLUMNS)?;
    for record in records {
        csv.serialize(record)?;
    }
    csv.flush()?;

    Ok(())
}

/// File name for an export: `<category>_<YYYY-MM-DD_HH-MM-SS>.csv`
pub fn export_file_name(category: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "{}_{}.csv",
        normalize_spacing(category),
        timestamp.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Writes `records` to a timestamped CSV file inside `directory`
///
/// The directory is created if it does not exist.
///
/// # Returns
///
/// The path of the written file
pub fn export_dataset(
    records: &[ListingRecord],
    directory: &Path,
    category: &str,
) -> ExportResult<PathBuf> {
    fs::create_dir_all(directory)?;

    let path = directory.join(export_file_name(category, Local::now()));
    let file = File::create(&path)?;
    write_csv(file, records)?;

    Ok(path)
}
