//! Single-file JSON storage adapter, the durable analogue of a browser's
//! local-storage entry: one blob at a fixed path, overwritten on every save.

use std::fs;
use std::path::{Path, PathBuf};

use plotplan_core::{PlotplanError, Result};

use crate::ports::{PersistedPlan, PlanStorage};

/// [`PlanStorage`] backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<PersistedPlan>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let plan = serde_json::from_str(&raw).map_err(|e| PlotplanError::PlanUnreadable {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(plan))
    }

    fn save(&self, plan: &PersistedPlan) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(plan)
            .map_err(|e| PlotplanError::Serialization(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
