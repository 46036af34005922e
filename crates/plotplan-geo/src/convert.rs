//! GeoJSON and geo-type conversions.
//!
//! Boundaries are stored as ordered `[lat, lng]` lists, while GeoJSON
//! positions are `[lng, lat]`; every conversion here swaps the order.

use geojson::{GeoJson, JsonObject, Value};
use plotplan_core::models::{
    Boundary, BoundingBox, CellId, GridDimensions, GridSystem, LatLng,
};
use plotplan_core::{PlotplanError, Result};

use crate::grid::GridCell;
use crate::spatial::bbox_extent_feet;

/// Serialize a boundary as a GeoJSON `Polygon` geometry string.
///
/// The exterior ring is closed by repeating the first point, as GeoJSON
/// requires.
pub fn boundary_to_geojson(boundary: &Boundary) -> Result<String> {
    if !boundary.is_usable() {
        return Err(PlotplanError::InvalidGeometry {
            reason: format!("boundary has {} points, need at least 3", boundary.len()),
        });
    }

    let mut ring: Vec<Vec<f64>> =
        boundary.points().iter().map(|p| vec![p.lng, p.lat]).collect();
    if ring.first() != ring.last() {
        ring.push(ring[0].clone());
    }

    let geometry = geojson::Geometry::new(Value::Polygon(vec![ring]));
    serde_json::to_string(&geometry).map_err(|e| PlotplanError::Serialization(e.to_string()))
}

/// Parse a GeoJSON `Polygon` geometry string back into a boundary.
///
/// Takes the exterior ring only and drops the closing duplicate point, so
/// the result round-trips with [`boundary_to_geojson`]. Anything that is not
/// a polygon geometry is rejected.
pub fn boundary_from_geojson(raw: &str) -> Result<Boundary> {
    let parsed: GeoJson = raw.parse().map_err(|e| PlotplanError::InvalidGeometry {
        reason: format!("not valid GeoJSON: {e}"),
    })?;

    let geometry = match parsed {
        GeoJson::Geometry(g) => g,
        other => {
            return Err(PlotplanError::InvalidGeometry {
                reason: format!("expected a Polygon geometry, got {other:?}"),
            })
        }
    };

    let rings = match geometry.value {
        Value::Polygon(rings) => rings,
        other => {
            return Err(PlotplanError::InvalidGeometry {
                reason: format!("expected a Polygon geometry, got {}", other.type_name()),
            })
        }
    };

    let exterior = rings.first().ok_or_else(|| PlotplanError::InvalidGeometry {
        reason: "polygon has no exterior ring".to_string(),
    })?;

    let mut points: Vec<LatLng> = exterior
        .iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(PlotplanError::InvalidGeometry {
                    reason: format!("position has {} ordinates, need 2", position.len()),
                });
            }
            Ok(LatLng::new(position[1], position[0]))
        })
        .collect::<Result<_>>()?;

    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    Ok(Boundary::new(points))
}

/// Convert a boundary to a `geo` polygon (x = lng, y = lat)
pub fn to_geo_polygon(boundary: &Boundary) -> geo::Polygon<f64> {
    let coords: Vec<geo::Coord<f64>> =
        boundary.points().iter().map(|p| geo::Coord { x: p.lng, y: p.lat }).collect();
    geo::Polygon::new(geo::LineString::new(coords), vec![])
}

/// Render a grid cell as a GeoJSON feature carrying its cell id
pub fn grid_cell_to_feature(cell: &GridCell) -> geojson::Feature {
    let ring: Vec<Vec<f64>> = cell.polygon.iter().map(|p| vec![p.lng, p.lat]).collect();
    let geometry = geojson::Geometry::new(Value::Polygon(vec![ring]));

    let mut properties = JsonObject::new();
    properties.insert(
        "cell_id".to_string(),
        serde_json::to_value(&cell.id).unwrap_or(serde_json::Value::Null),
    );

    geojson::Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(match &cell.id {
            CellId::Index(i) => geojson::feature::Id::Number((*i).into()),
            CellId::Coord(s) => geojson::feature::Id::String(s.clone()),
        }),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Assemble the `GridSystem` DTO for a derived cell set
pub fn grid_cells_to_system(
    cells: &[GridCell],
    cell_size_feet: f64,
    bbox: &BoundingBox,
) -> GridSystem {
    let (width_feet, height_feet) = bbox_extent_feet(bbox);
    GridSystem {
        grid_cells: cells.iter().map(grid_cell_to_feature).collect(),
        cell_size_feet,
        total_cells: cells.len(),
        dimensions: GridDimensions { width_feet, height_feet },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridStrategy;
    use crate::spatial::bounding_box;

    fn rect() -> Boundary {
        Boundary::new(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 10.0),
            LatLng::new(10.0, 10.0),
            LatLng::new(10.0, 0.0),
        ])
    }

    #[test]
    fn geojson_round_trip_swaps_lng_lat() {
        let raw = boundary_to_geojson(&rect()).unwrap();
        // GeoJSON positions are [lng, lat]: the second boundary point
        // (lat 0, lng 10) must appear as [10, 0]
        assert!(raw.contains("[10.0,0.0]"));

        let back = boundary_from_geojson(&raw).unwrap();
        assert_eq!(back, rect());
    }

    #[test]
    fn degenerate_boundary_does_not_serialize() {
        let two = Boundary::new(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]);
        assert!(boundary_to_geojson(&two).is_err());
    }

    #[test]
    fn non_polygon_geometry_is_rejected() {
        let point = r#"{"type":"Point","coordinates":[10.0,0.0]}"#;
        assert!(matches!(
            boundary_from_geojson(point),
            Err(PlotplanError::InvalidGeometry { .. })
        ));

        assert!(boundary_from_geojson("not json at all").is_err());
    }

    #[test]
    fn geo_polygon_uses_xy_order() {
        let polygon = to_geo_polygon(&rect());
        let first = polygon.exterior().coords().next().unwrap();
        assert_eq!((first.x, first.y), (0.0, 0.0));
        let second = polygon.exterior().coords().nth(1).unwrap();
        // Boundary point (lat 0, lng 10) lands at x=10, y=0
        assert_eq!((second.x, second.y), (10.0, 0.0));
    }

    #[test]
    fn grid_system_dto_counts_cells() {
        let cells = GridStrategy::Uniform { rows: 2, cols: 2 }.generate(rect().points());
        let bbox = bounding_box(rect().points()).unwrap();
        let system = grid_cells_to_system(&cells, 5.0, &bbox);

        assert_eq!(system.total_cells, 4);
        assert_eq!(system.grid_cells.len(), 4);
        assert_eq!(system.cell_size_feet, 5.0);
        assert!(system.dimensions.width_feet > 0.0);

        let first = &system.grid_cells[0];
        assert_eq!(first.id, Some(geojson::feature::Id::Number(0.into())));
        assert!(first.geometry.is_some());
    }
}
