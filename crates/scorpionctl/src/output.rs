//! Output rendering: table (default) or JSON.
//!
//! Table uses `tabled`; JSON serializes the underlying core types via
//! serde so scripted callers see exactly what the API reported.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use scorpion_core::{BatchResult, CurrentStatus, ParamStatus};

use crate::cli::OutputFormat;

// ── Status rendering ─────────────────────────────────────────────────

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "PARAM")]
    code: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "CURRENT")]
    value: String,
    #[tabled(rename = "DEFAULT")]
    default: String,
    #[tabled(rename = "STATE")]
    state: String,
}

fn status_row(row: &ParamStatus) -> StatusRow {
    let state = if row.matches() {
        "ok".green().to_string()
    } else {
        "drift".red().to_string()
    };

    StatusRow {
        code: row.code.clone(),
        name: row.name.clone(),
        value: row.value_text(),
        default: row.default_text(),
        state,
    }
}

/// Render the current-vs-default comparison.
pub fn render_status(format: &OutputFormat, status: &CurrentStatus) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<StatusRow> = status.iter().map(status_row).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => render_json(status),
    }
}

// ── Batch rendering ──────────────────────────────────────────────────

/// Render the outcome of an apply run.
pub fn render_batch(format: &OutputFormat, result: &BatchResult) -> String {
    match format {
        OutputFormat::Table => {
            let mut out = format!(
                "{} parameter(s) applied, {} rejected",
                result.responses.len() - result.failures.len(),
                result.failures.len()
            );
            for failure in &result.failures {
                out.push_str(&format!(
                    "\n  {} {}: {}",
                    "rejected".red(),
                    failure.id,
                    failure.error.as_deref().unwrap_or("unknown error")
                ));
            }
            out
        }
        OutputFormat::Json => render_json(result),
    }
}

// ── Shared helpers ───────────────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
