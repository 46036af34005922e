//! Bounding boxes, point-in-polygon membership, and unit conversions.

use plotplan_core::models::{BoundingBox, LatLng};

/// Meters per degree of latitude (and of longitude at the equator)
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Feet per degree of latitude, used by corner-drag resize
pub const FEET_PER_DEGREE_LAT: f64 = 364_000.0;

/// Axis-aligned extent of a point set. Returns `None` for an empty set.
pub fn bounding_box(points: &[LatLng]) -> Option<BoundingBox> {
    let first = points.first()?;
    let mut bbox = BoundingBox {
        min_lat: first.lat,
        min_lng: first.lng,
        max_lat: first.lat,
        max_lng: first.lng,
    };
    for p in &points[1..] {
        if p.lat < bbox.min_lat {
            bbox.min_lat = p.lat;
        }
        if p.lat > bbox.max_lat {
            bbox.max_lat = p.lat;
        }
        if p.lng < bbox.min_lng {
            bbox.min_lng = p.lng;
        }
        if p.lng > bbox.max_lng {
            bbox.max_lng = p.lng;
        }
    }
    Some(bbox)
}

/// Ray-casting point-in-polygon test.
///
/// Walks edge pairs `(i, j = i-1)` and toggles the inside flag whenever the
/// test point's latitude is bracketed by the edge's endpoint latitudes and
/// the edge's intercept at that latitude lies beyond the point's longitude.
/// An odd number of toggles means inside. Points exactly on a vertex follow
/// the strict/non-strict inequality pair below; the result is deterministic
/// for this implementation.
pub fn point_in_polygon(point: LatLng, polygon: &[LatLng]) -> bool {
    let (x, y) = (point.lat, point.lng);
    let mut inside = false;

    let mut j = polygon.len().wrapping_sub(1);
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].lat, polygon[i].lng);
        let (xj, yj) = (polygon[j].lat, polygon[j].lng);

        if ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Degrees of latitude spanned by `meters`
pub fn meters_to_lat_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE_LAT
}

/// Degrees of longitude spanned by `meters` at latitude `at_lat`
pub fn meters_to_lng_degrees(meters: f64, at_lat: f64) -> f64 {
    meters / (METERS_PER_DEGREE_LAT * at_lat.to_radians().cos())
}

/// Approximate physical extent of a bounding box in feet, `(width, height)`
pub fn bbox_extent_feet(bbox: &BoundingBox) -> (f64, f64) {
    let feet_per_lng = FEET_PER_DEGREE_LAT * bbox.min_lat.to_radians().cos();
    let width = bbox.lng_span().abs() * feet_per_lng;
    let height = bbox.lat_span().abs() * FEET_PER_DEGREE_LAT;
    (width, height)
}
