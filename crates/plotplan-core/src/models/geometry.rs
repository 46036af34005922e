//! Canonical coordinate types used across all plotplan crates.
//!
//! Coordinates serialize as `[lat, lng]` two-element arrays, matching the
//! shape the drawing surface and the persisted plan blob exchange.

use serde::{Deserialize, Serialize};

/// A WGS 84 coordinate, latitude first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.lat, p.lng]
    }
}

/// Closed polygon outline of a yard or garden area.
///
/// The point list is stored in insertion order; insertion order defines the
/// winding, and the last point implicitly connects back to the first. A
/// boundary needs at least 3 distinct points to describe a usable polygon,
/// but the type itself does not enforce that - callers that need a polygon
/// check [`Boundary::is_usable`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boundary {
    points: Vec<LatLng>,
}

impl Boundary {
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polygon needs at least 3 points to enclose any area.
    pub fn is_usable(&self) -> bool {
        self.points.len() >= 3
    }
}

impl From<Vec<LatLng>> for Boundary {
    fn from(points: Vec<LatLng>) -> Self {
        Self::new(points)
    }
}

/// Axis-aligned lat/lng extent of a point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Extent in degrees of latitude
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Extent in degrees of longitude
    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latlng_serializes_as_pair() {
        let p = LatLng::new(45.5, -122.6);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[45.5,-122.6]");
        let back: LatLng = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn boundary_usability() {
        assert!(!Boundary::default().is_usable());
        assert!(!Boundary::new(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]).is_usable());
        assert!(Boundary::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
        ])
        .is_usable());
    }
}
