use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a report run. None of these are recovered from.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Expected only 2 arguments")]
    ArgumentCount,

    #[error("The format of '{name}' is not valid. Valid format: 'X-MMMYY' (X-initial, MMM-month, YY-year)")]
    InvalidFilename { name: String },

    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{}': {source}", .path.display())]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
