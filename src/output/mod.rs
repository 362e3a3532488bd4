//! Output module for scraped datasets
//!
//! The crawl core only produces a [`Dataset`](crate::model::Dataset); this
//! module turns it into CSV, either into any writer or into a timestamped
//! file named after the scraped style.

mod csv_export;

pub use csv_export::{export_dataset, export_file_name, write_csv};

use thiserror::Error;

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
