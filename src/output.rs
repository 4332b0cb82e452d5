use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Local};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::types::Record;
use crate::view::{Row, ViewState};

static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_format(format: OutputFormat) {
    OUTPUT_JSON.store(matches!(format, OutputFormat::Json), Ordering::Relaxed);
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl EmployeeRow {
    fn new(index: usize, row: &Row) -> Self {
        Self {
            index: index + 1,
            name: truncate(&row.name, 40),
            role: role_colored(&truncate(&row.role, 30)),
            id: row.record.id.to_string(),
        }
    }
}

/// Render the whole view as a table, or its records as JSON.
pub fn print_view(view: &ViewState) {
    if is_json_output() {
        let records: Vec<&Record> = view.rows().iter().map(|row| &row.record).collect();
        println!("{}", serde_json::to_string_pretty(&records).unwrap_or_default());
        return;
    }

    println!("{}", render_table(view.rows()));
    if !is_quiet() {
        println!("{}", footer(view.len(), view.refreshed_at()).bright_black());
    }
}

pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "No employees.".to_string();
    }
    let rows: Vec<EmployeeRow> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| EmployeeRow::new(i, row))
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

fn footer(count: usize, refreshed_at: Option<DateTime<Local>>) -> String {
    let noun = if count == 1 { "employee" } else { "employees" };
    match refreshed_at {
        Some(at) => format!("{count} {noun}, refreshed at {}", at.format("%H:%M:%S")),
        None => format!("{count} {noun}"),
    }
}

/// Print a status line ahead of other output (skipped with --quiet or in
/// JSON mode, where stdout must stay a single document)
pub fn print_status(message: &str) {
    if let Some(line) = status_line(message, is_json_output(), is_quiet()) {
        println!("{line}");
    }
}

fn status_line(message: &str, json: bool, quiet: bool) -> Option<&str> {
    (!json && !quiet).then_some(message)
}

/// Print a message (skipped with --quiet, JSON object in JSON mode)
pub fn print_message(message: &str) {
    if is_quiet() {
        return;
    }
    if is_json_output() {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("{message}");
    }
}

/// Color a role by seniority keywords
pub fn role_colored(role: &str) -> String {
    let lower = role.to_lowercase();
    if lower.contains("lead") || lower.contains("head") || lower.contains("manager") {
        role.yellow().bold().to_string()
    } else if lower.contains("senior") || lower.contains("principal") {
        role.blue().to_string()
    } else if lower.contains("intern") || lower.contains("junior") {
        role.bright_black().to_string()
    } else {
        role.to_string()
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
