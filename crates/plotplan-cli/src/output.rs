use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Writes command results as styled text or JSON envelopes, chosen once at
/// startup via `--json`.
pub struct OutputWriter {
    json: bool,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: impl Display) {
        self.status("success", message);
    }

    pub fn info(&self, message: impl Display) {
        self.status("info", message);
    }

    /// Warnings go to stderr so piped JSON output stays clean
    pub fn warning(&self, message: impl Display) {
        if self.json {
            let envelope = serde_json::json!({
                "status": "warning",
                "message": message.to_string(),
            });
            eprintln!("{}", serde_json::to_string_pretty(&envelope).unwrap());
        } else {
            eprintln!("{} {}", style("⚠").yellow().bold(), message);
        }
    }

    fn status(&self, status: &str, message: impl Display) {
        if self.json {
            let envelope = serde_json::json!({
                "status": status,
                "message": message.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&envelope).unwrap());
            return;
        }
        let marker = match status {
            "success" => style("✓").green().bold(),
            _ => style("ℹ").blue().bold(),
        };
        println!("{marker} {message}");
    }

    /// Rows render as a rounded table, or as a plain JSON array in JSON mode
    pub fn table<T: Tabled + Serialize>(&self, rows: &[T]) {
        if self.json {
            println!("{}", serde_json::to_string_pretty(rows).unwrap());
            return;
        }
        if rows.is_empty() {
            println!("{}", style("(no data)").dim());
            return;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    /// Structured output for commands with richer shapes than a message line
    pub fn json_value(&self, value: &serde_json::Value) {
        println!("{}", serde_json::to_string_pretty(value).unwrap());
    }
}
