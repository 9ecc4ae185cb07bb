use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use log::debug;
use regex::Regex;
use crate::error::{ReportError, Result};

/// Spanish month abbreviations, in calendar order.
pub const MONTHS: [&str; 12] = [
    "ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SEP", "OCT", "NOV", "DIC",
];

// X-MMMYY: owner initial, month code, two digit year.
static FILENAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z]-[a-z][a-z0-9]{2}[0-9]{2}$").expect("filename pattern is valid")
});

/// A statement file whose name passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFile {
    pub path: PathBuf,
    pub initial: String,
    pub month: String,
}

/// Validates the file name of `path` against the `X-MMMYY[.ext]` convention
/// and splits it into the owner initial and the statement month.
///
/// Only the last path component is inspected; everything after its first `.`
/// is treated as extension.
pub fn parse_filename(path: &Path) -> Result<StatementFile> {
    let invalid = || ReportError::InvalidFilename { name: path.display().to_string() };

    let name = path.file_name().and_then(|name| name.to_str()).ok_or_else(invalid)?;
    let stem = name.split_once('.').map_or(name, |(stem, _)| stem);
    if !FILENAME_PATTERN.is_match(stem) {
        return Err(invalid());
    }

    let (initial, month) = stem.split_once('-').ok_or_else(invalid)?;
    let code = month.get(..3).ok_or_else(invalid)?;
    if !MONTHS.iter().any(|known| known.eq_ignore_ascii_case(code)) {
        return Err(invalid());
    }

    debug!("{}: initial {}, month {}", path.display(), initial, month);
    Ok(StatementFile {
        path: path.to_path_buf(),
        initial: initial.to_string(),
        month: month.to_string(),
    })
}
