//! Garden, zone, plant, and grid-system DTOs for the REST backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geometry::LatLng;

/// Unique identifier for a garden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GardenId(pub u64);

/// Unique identifier for a zone within a garden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u64);

/// Unique identifier for a plant record within a garden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlantId(pub u64);

/// A saved garden as the backend returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garden {
    pub id: GardenId,
    pub name: String,
    pub address: String,
    pub boundary: Vec<LatLng>,
    pub center: LatLng,
    pub created_at: DateTime<Utc>,
}

/// A named planting zone within a garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub garden_id: GardenId,
    pub name: String,
    pub color: String,
    pub boundary: Vec<LatLng>,
}

/// A plant record within a garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub garden_id: GardenId,
    pub name: String,
    pub species: Option<String>,
    pub color: String,
}

/// Physical extent of a derived grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub width_feet: f64,
    pub height_feet: f64,
}

/// A derived grid as `GET /gardens/:id/grid` returns it.
///
/// Cells are GeoJSON `Feature`s carrying `Polygon` geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSystem {
    pub grid_cells: Vec<geojson::Feature>,
    pub cell_size_feet: f64,
    pub total_cells: usize,
    pub dimensions: GridDimensions,
}
