use plotplan_core::models::{LatLng, PlantedCell};
use plotplan_core::Result;
use serde::{Deserialize, Serialize};

/// The subset of plan state that survives a restart, stored as one JSON blob.
///
/// `address` and `center` are present only when the persistence policy allows
/// writing location data. Unknown or missing fields deserialize to defaults
/// so older blobs keep loading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedPlan {
    #[serde(default)]
    pub boundary: Option<Vec<LatLng>>,
    #[serde(default)]
    pub planted_cells: Vec<PlantedCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_grid_visible: Option<bool>,
}

/// Port for plan persistence.
///
/// One blob per store; `save` overwrites, `clear` removes the blob entirely.
/// Operations are synchronous - the plan store calls them inline after each
/// mutation.
pub trait PlanStorage: Send + Sync {
    /// Read the persisted plan, `None` if nothing has been saved
    fn load(&self) -> Result<Option<PersistedPlan>>;

    /// Overwrite the persisted plan
    fn save(&self, plan: &PersistedPlan) -> Result<()>;

    /// Remove the persisted plan entirely
    fn clear(&self) -> Result<()>;
}
