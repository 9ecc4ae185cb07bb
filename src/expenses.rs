use std::sync::LazyLock;
use log::trace;
use regex::Regex;
use crate::csv_handler::RawRecord;

/// Report columns, in output order.
pub const COLUMN_ORDER: [&str; 5] = ["month", "text", "initial", "amount", "date"];

// Whitespace followed by a run of four or more closing parentheses, left by the bank export.
static TRAILING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\){4,}").expect("marker pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
struct CleanRow {
    date: String,
    amount: String,
    text: String,
}

/// A debit row tagged with the owner and month of the statement it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub initial: String,
    pub month: String,
    pub date: String,
    pub amount: String,
    pub text: String,
}

impl ExpenseRecord {
    /// Field values in `COLUMN_ORDER`.
    pub fn columns(&self) -> [&str; 5] {
        [
            self.month.as_str(),
            self.text.as_str(),
            self.initial.as_str(),
            self.amount.as_str(),
            self.date.as_str(),
        ]
    }
}

#[inline]
fn is_debit(row: &RawRecord) -> bool {
    row.amount.starts_with('-')
}

fn clean_row(row: RawRecord) -> CleanRow {
    CleanRow {
        date: row.date.replace('.', "/"),
        amount: row.amount.replacen('-', "", 1),
        text: TRAILING_MARKER.replace_all(&row.text, "").into_owned(),
    }
}

/// Keeps the debit rows of one statement, normalises them and tags each
/// with the statement's owner initial and month. Input order is preserved.
pub fn format_statement(rows: Vec<RawRecord>, initial: &str, month: &str) -> Vec<ExpenseRecord> {
    rows.into_iter()
        .filter(|row| {
            let debit = is_debit(row);
            if !debit {
                trace!("Skipping non-debit row dated {} with amount {}", row.date, row.amount);
            }
            debit
        })
        .map(clean_row)
        .map(|row| ExpenseRecord {
            initial: initial.to_string(),
            month: month.to_string(),
            date: row.date,
            amount: row.amount,
            text: row.text,
        })
        .collect()
}

/// Joins the per-statement expenses and orders them by date.
///
/// Dates are compared as lowercase strings, not as calendar dates, so
/// `10/1/20` sorts before `2/1/20`. Equal dates keep their input order.
pub fn merge_by_date(statements: impl IntoIterator<Item = Vec<ExpenseRecord>>) -> Vec<ExpenseRecord> {
    let mut expenses: Vec<ExpenseRecord> = statements.into_iter().flatten().collect();
    expenses.sort_by_cached_key(|expense| expense.date.to_lowercase());
    expenses
}
