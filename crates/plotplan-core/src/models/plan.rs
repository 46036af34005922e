//! Planted-cell and history snapshot types for the in-progress plan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of one grid cell.
///
/// Uniform grids index cells row-major; boundary-clipped grids key cells by
/// their anchor coordinate rendered as a fixed-precision `"lat_lng"` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellId {
    Index(u32),
    Coord(String),
}

impl CellId {
    /// Key for a boundary-clipped cell anchored at `(lat, lng)`.
    ///
    /// Six decimal places (~0.1 m) so that re-deriving the same grid yields
    /// the same keys.
    pub fn coord(lat: f64, lng: f64) -> Self {
        CellId::Coord(format!("{lat:.6}_{lng:.6}"))
    }
}

impl From<u32> for CellId {
    fn from(index: u32) -> Self {
        CellId::Index(index)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellId::Index(i) => write!(f, "{i}"),
            CellId::Coord(s) => write!(f, "{s}"),
        }
    }
}

/// Reference to a plant from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRef {
    pub id: u32,
    pub name: String,
}

impl PlantRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// One occupied grid cell: at most one per `cell_id` at any time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantedCell {
    pub cell_id: CellId,
    pub plant: PlantRef,
    pub color: String,
}

/// The full planted-cell state at one point in the undo/redo history
pub type Snapshot = Vec<PlantedCell>;
