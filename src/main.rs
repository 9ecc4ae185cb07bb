use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::info;
use crate::error::{ReportError, Result};

mod csv_handler;
mod error;
mod expenses;
mod filename;

/// Merges the expenses of two bank statement exports into one report,
/// sorted by date and printed to standard output.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Statement exports named X-MMMYY[.ext] (X-initial, MMM-month, YY-year)
    files: Vec<PathBuf>,
}

fn run(paths: &[PathBuf]) -> Result<()> {
    if paths.len() != 2 {
        return Err(ReportError::ArgumentCount);
    }

    let mut statements = Vec::with_capacity(paths.len());
    for path in paths {
        statements.push(filename::parse_filename(path)?);
        if !path.exists() {
            return Err(ReportError::FileNotFound(path.clone()));
        }
    }

    let mut debits = Vec::with_capacity(statements.len());
    for statement in &statements {
        let rows = csv_handler::load_csv_file(&statement.path)?;
        let total = rows.len();
        let kept = expenses::format_statement(rows, &statement.initial, &statement.month);
        info!("{}: kept {} of {} rows as expenses", statement.path.display(), kept.len(), total);
        debits.push(kept);
    }

    let report = expenses::merge_by_date(debits);
    info!("Writing {} expenses", report.len());
    csv_handler::write_report(std::io::stdout().lock(), &report)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli.files) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
