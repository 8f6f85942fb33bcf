//! Output formatting helpers for the `cpc` CLI.
//!
//! Provides JSON output, aligned tables and the proposition table shared
//! by the translation commands.

use std::io::{self, Write};

use cpc_core::mapping::Proposition;
use cpc_ui::styles::{render_bold, render_separator};
use serde::Serialize;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Column widths in characters, so accented clauses line up.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    widths
}

/// Print a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let widths = column_widths(headers, rows);
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let padded = format!("{:<width$}", header, width = widths[i]);
        let _ = write!(handle, "{}", render_bold(&padded));
    }
    let _ = writeln!(handle);

    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{}", render_separator(*width));
    }
    let _ = writeln!(handle);

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                let _ = write!(handle, "  ");
            }
            if i < widths.len() {
                let _ = write!(handle, "{:<width$}", cell, width = widths[i]);
            } else {
                let _ = write!(handle, "{}", cell);
            }
        }
        let _ = writeln!(handle);
    }
}

/// One `[variable, clause]` row per proposition.
pub fn proposition_rows<'a, I>(propositions: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = &'a Proposition>,
{
    propositions
        .into_iter()
        .map(|p| vec![p.variable.to_string(), p.clause.clone()])
        .collect()
}

/// Print the `Variable  Clause` table for a mapping.
pub fn output_propositions<'a, I>(propositions: I)
where
    I: IntoIterator<Item = &'a Proposition>,
{
    output_table(&["Variable", "Clause"], &proposition_rows(propositions));
}
