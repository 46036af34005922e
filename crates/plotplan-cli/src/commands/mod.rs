//! Command implementations

mod boundary;
mod config;
mod features;
mod geocode;
mod grid;
mod history;
mod plant;
mod reset;
mod status;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use plotplan_core::config::{CliConfigOverrides, PlanConfig};
use plotplan_store::{GardenPlan, JsonFileStorage, PersistencePolicy};

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Default config file probed when --config is not given
const DEFAULT_CONFIG_PATH: &str = "plotplan.toml";

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Status => status::execute(&open_plan(&config), &output),
        Commands::Boundary { action } => {
            boundary::execute(action, &mut open_plan(&config), &output)
        }
        Commands::Plant(args) => plant::place(args, &mut open_plan(&config), &output),
        Commands::Remove(args) => plant::remove(args, &mut open_plan(&config), &output),
        Commands::Undo => history::undo(&mut open_plan(&config), &output),
        Commands::Redo => history::redo(&mut open_plan(&config), &output),
        Commands::Grid { action } => grid::execute(action, &mut open_plan(&config), &output),
        Commands::Geocode(args) => {
            geocode::execute(args, &config, &mut open_plan(&config), &output).await
        }
        Commands::Features { action } => {
            features::execute(action, &config, &open_plan(&config), &output).await
        }
        Commands::Config => config::execute(&config, &output),
        Commands::Reset(args) => reset::execute(args, &mut open_plan(&config), &output),
    }
}

/// Resolve layered configuration: defaults < file < environment < CLI
fn load_config(cli: &Cli) -> Result<PlanConfig> {
    let mut config = PlanConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
    } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
        config = config
            .load_from_file(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("failed to load config from {DEFAULT_CONFIG_PATH}"))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        state_path: cli.state_file.clone(),
        api_base_url: cli.api_url.clone(),
        ..Default::default()
    });

    tracing::debug!(
        state_path = %config.state_path.value.display(),
        api_base_url = %config.api_base_url.value,
        "configuration resolved"
    );
    Ok(config)
}

/// Open the plan store backed by the configured state file
fn open_plan(config: &PlanConfig) -> GardenPlan {
    let storage = JsonFileStorage::new(config.state_path.value.clone());
    GardenPlan::load(Arc::new(storage), PersistencePolicy::from(config))
}
