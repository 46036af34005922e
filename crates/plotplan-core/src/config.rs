use crate::error::{PlotplanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a configuration value came from.
///
/// Declaration order is precedence order: a later source outranks an earlier
/// one, so `Ord` on the variants is the precedence comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

/// A value paired with the source that set it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Apply `value` only when `source` outranks the current source.
    /// A repeat write from the same layer is ignored.
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source > self.source {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for PlotPlan.
///
/// Two of these values are deliberate product decisions rather than tuning
/// knobs: `persist_location` controls whether the street address and map
/// center are written into the plan file at all (off by default so the saved
/// blob carries no personally identifying location), and
/// `clear_preserves_location` controls whether a full reset keeps the
/// in-memory address/center so the user does not have to search again.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Write address/center into the persisted plan
    pub persist_location: ConfigValue<bool>,
    /// Keep address/center in memory across a full reset
    pub clear_preserves_location: ConfigValue<bool>,
    /// Undo/redo history capacity
    pub max_history: ConfigValue<usize>,
    /// Physical grid cell size in feet
    pub cell_size_feet: ConfigValue<f64>,
    /// Path of the persisted plan blob
    pub state_path: ConfigValue<PathBuf>,
    /// Base URL of the garden/feature REST backend
    pub api_base_url: ConfigValue<String>,
    /// Geocoding endpoint
    pub geocoder_url: ConfigValue<String>,
}

impl PlanConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            persist_location: ConfigValue::new(false, ConfigSource::Default),
            clear_preserves_location: ConfigValue::new(true, ConfigSource::Default),
            max_history: ConfigValue::new(50, ConfigSource::Default),
            cell_size_feet: ConfigValue::new(1.0, ConfigSource::Default),
            state_path: ConfigValue::new(PathBuf::from("plotplan.json"), ConfigSource::Default),
            api_base_url: ConfigValue::new(
                "http://localhost:8000/api".to_string(),
                ConfigSource::Default,
            ),
            geocoder_url: ConfigValue::new(
                "https://nominatim.openstreetmap.org/search".to_string(),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| PlotplanError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("failed to read config file: {e}"),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| PlotplanError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("failed to parse TOML: {e}"),
            })?;

        if let Some(persist_location) = file_config.persist_location {
            self.persist_location.update(persist_location, ConfigSource::File);
        }

        if let Some(clear_preserves_location) = file_config.clear_preserves_location {
            self.clear_preserves_location.update(clear_preserves_location, ConfigSource::File);
        }

        if let Some(max_history) = file_config.max_history {
            self.max_history.update(max_history, ConfigSource::File);
        }

        if let Some(cell_size_feet) = file_config.cell_size_feet {
            self.cell_size_feet.update(cell_size_feet, ConfigSource::File);
        }

        if let Some(state_path) = file_config.state_path {
            self.state_path.update(state_path, ConfigSource::File);
        }

        if let Some(api_base_url) = file_config.api_base_url {
            self.api_base_url.update(api_base_url, ConfigSource::File);
        }

        if let Some(geocoder_url) = file_config.geocoder_url {
            self.geocoder_url.update(geocoder_url, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // PLOTPLAN_PERSIST_LOCATION
        if let Ok(raw) = env::var("PLOTPLAN_PERSIST_LOCATION") {
            match parse_bool(&raw) {
                Ok(v) => self.persist_location.update(v, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PLOTPLAN_PERSIST_LOCATION value '{}': expected true or false",
                    raw
                ),
            }
        }

        // PLOTPLAN_CLEAR_PRESERVES_LOCATION
        if let Ok(raw) = env::var("PLOTPLAN_CLEAR_PRESERVES_LOCATION") {
            match parse_bool(&raw) {
                Ok(v) => self.clear_preserves_location.update(v, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PLOTPLAN_CLEAR_PRESERVES_LOCATION value '{}': expected true or false",
                    raw
                ),
            }
        }

        // PLOTPLAN_MAX_HISTORY
        if let Ok(raw) = env::var("PLOTPLAN_MAX_HISTORY") {
            match raw.parse::<usize>() {
                Ok(v) if v > 0 => self.max_history.update(v, ConfigSource::Environment),
                _ => tracing::warn!(
                    "Invalid PLOTPLAN_MAX_HISTORY value '{}': expected a positive integer",
                    raw
                ),
            }
        }

        // PLOTPLAN_CELL_SIZE_FEET
        if let Ok(raw) = env::var("PLOTPLAN_CELL_SIZE_FEET") {
            match raw.parse::<f64>() {
                Ok(v) if v > 0.0 => self.cell_size_feet.update(v, ConfigSource::Environment),
                _ => tracing::warn!(
                    "Invalid PLOTPLAN_CELL_SIZE_FEET value '{}': expected a positive number",
                    raw
                ),
            }
        }

        // PLOTPLAN_STATE_PATH
        if let Ok(raw) = env::var("PLOTPLAN_STATE_PATH") {
            self.state_path.update(PathBuf::from(raw), ConfigSource::Environment);
        }

        // PLOTPLAN_API_URL
        if let Ok(raw) = env::var("PLOTPLAN_API_URL") {
            self.api_base_url.update(raw, ConfigSource::Environment);
        }

        // PLOTPLAN_GEOCODER_URL
        if let Ok(raw) = env::var("PLOTPLAN_GEOCODER_URL") {
            self.geocoder_url.update(raw, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(persist_location) = overrides.persist_location {
            self.persist_location.update(persist_location, ConfigSource::Cli);
        }

        if let Some(max_history) = overrides.max_history {
            self.max_history.update(max_history, ConfigSource::Cli);
        }

        if let Some(cell_size_feet) = overrides.cell_size_feet {
            self.cell_size_feet.update(cell_size_feet, ConfigSource::Cli);
        }

        if let Some(state_path) = overrides.state_path {
            self.state_path.update(state_path, ConfigSource::Cli);
        }

        if let Some(api_base_url) = overrides.api_base_url {
            self.api_base_url.update(api_base_url, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "persist_location".to_string(),
            (self.persist_location.value.to_string(), self.persist_location.source),
        );

        map.insert(
            "clear_preserves_location".to_string(),
            (
                self.clear_preserves_location.value.to_string(),
                self.clear_preserves_location.source,
            ),
        );

        map.insert(
            "max_history".to_string(),
            (self.max_history.value.to_string(), self.max_history.source),
        );

        map.insert(
            "cell_size_feet".to_string(),
            (self.cell_size_feet.value.to_string(), self.cell_size_feet.source),
        );

        map.insert(
            "state_path".to_string(),
            (self.state_path.value.display().to_string(), self.state_path.source),
        );

        map.insert(
            "api_base_url".to_string(),
            (self.api_base_url.value.clone(), self.api_base_url.source),
        );

        map.insert(
            "geocoder_url".to_string(),
            (self.geocoder_url.value.clone(), self.geocoder_url.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    persist_location: Option<bool>,
    clear_preserves_location: Option<bool>,
    max_history: Option<usize>,
    cell_size_feet: Option<f64>,
    state_path: Option<PathBuf>,
    api_base_url: Option<String>,
    geocoder_url: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub persist_location: Option<bool>,
    pub max_history: Option<usize>,
    pub cell_size_feet: Option<f64>,
    pub state_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
}

/// Parse a boolean from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(PlotplanError::ConfigInvalid {
            key: "bool".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}
