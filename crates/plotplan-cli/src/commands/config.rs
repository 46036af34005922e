use anyhow::Result;
use plotplan_core::config::{ConfigSource, PlanConfig};
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct ConfigRow {
    key: String,
    value: String,
    source: String,
}

fn source_label(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Default => "default",
        ConfigSource::File => "file",
        ConfigSource::Environment => "environment",
        ConfigSource::Cli => "cli",
    }
}

/// Print every effective config value and which layer set it
pub fn execute(config: &PlanConfig, output: &OutputWriter) -> Result<()> {
    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow {
            key,
            value,
            source: source_label(source).to_string(),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    output.table(&rows);
    Ok(())
}
