use std::io;

use thiserror::Error;

/// Failures while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot write report: {0}")]
    Io(#[from] io::Error),
}
