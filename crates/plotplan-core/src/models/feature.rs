//! Named, colored sub-regions ("house", "lawn") persisted by the REST backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(pub u64);

/// A named, colored polygon owned by the backend.
///
/// `boundary` is a serialized GeoJSON `Polygon` geometry string; GeoJSON
/// positions are `[lng, lat]`, the reverse of [`LatLng`] order.
///
/// [`LatLng`]: crate::models::LatLng
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub boundary: String,
    pub color: String,
    pub garden_id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
}

/// Body for creating or replacing a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDraft {
    pub name: String,
    pub boundary: String,
    pub color: String,
    pub garden_id: u64,
    pub user_id: u64,
}
