use std::io::Write;
use std::path::Path;
use log::debug;
use serde::Deserialize;
use crate::error::{ReportError, Result};
use crate::expenses::{COLUMN_ORDER, ExpenseRecord};

pub const INPUT_SEPARATOR: u8 = b';';
pub const HEADER_SEPARATOR: &str = ";";
pub const OUTPUT_SEPARATOR: &str = "\t";

/// One row of a bank statement export. Columns other than these are ignored.
#[derive(Debug, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Amount")]
    pub amount: String,
}

// Exports are not always UTF-8; undecodable bytes become U+FFFD.
fn parse_statement(content: &[u8]) -> csv::Result<Vec<RawRecord>> {
    let text = String::from_utf8_lossy(content);
    csv::ReaderBuilder::new()
        .delimiter(INPUT_SEPARATOR)
        .from_reader(text.as_bytes())
        .into_deserialize::<RawRecord>()
        .collect()
}

/// Reads a whole `;` separated statement export into memory and parses it.
pub fn load_csv_file(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read(path).map_err(|source| ReportError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = parse_statement(&content).map_err(|source| ReportError::CsvParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Writes the report: a `;` joined header, then one tab separated line per expense.
pub fn write_report<W: Write>(mut out: W, expenses: &[ExpenseRecord]) -> std::io::Result<()> {
    writeln!(out, "{}", COLUMN_ORDER.join(HEADER_SEPARATOR))?;
    for expense in expenses {
        writeln!(out, "{}", expense.columns().join(OUTPUT_SEPARATOR))?;
    }
    out.flush()
}
