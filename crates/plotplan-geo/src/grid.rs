//! Grid derivation: rows/columns from physical extents, uniform and
//! boundary-clipped cell generation, and pure resize operations.
//!
//! The grid is never mutated in place; every resize or boundary change
//! recomputes cells from `(boundary | bounding box, rows, cols, cell size)`.

use plotplan_core::models::{BoundingBox, CellId, LatLng};

use crate::spatial::{bounding_box, meters_to_lat_degrees, meters_to_lng_degrees, point_in_polygon};

/// Lat/lng extent of one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// One rectangular grid cell.
///
/// `polygon` is a closed 5-point ring (SW, NW, NE, SE, SW) in consistent
/// counter-clockwise winding.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub id: CellId,
    pub bounds: CellBounds,
    pub polygon: Vec<LatLng>,
}

/// Derive grid dimensions from physical extents.
///
/// Rounds each extent to the nearest whole number of cells, floored at 1 so
/// shrink operations never produce an empty grid. Callers must reject a
/// non-positive `cell_size_units` before calling.
pub fn derive_rows_cols(
    width_units: f64,
    height_units: f64,
    cell_size_units: f64,
) -> (usize, usize) {
    let rows = ((height_units / cell_size_units).round() as usize).max(1);
    let cols = ((width_units / cell_size_units).round() as usize).max(1);
    (rows, cols)
}

/// Subdivide a bounding box into `rows * cols` equal cells (in degree terms).
///
/// Cell index is `row * cols + col`, row-major with the origin at the
/// south-west corner: row 0 is the southernmost row, column 0 the
/// westernmost column. [`CellId::Index`] keys depend on this ordering, so it
/// is stable.
pub fn generate_uniform_grid(bbox: &BoundingBox, rows: usize, cols: usize) -> Vec<GridCell> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let lat_step = bbox.lat_span() / rows as f64;
    let lng_step = bbox.lng_span() / cols as f64;

    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let south = bbox.min_lat + row as f64 * lat_step;
            let north = bbox.min_lat + (row + 1) as f64 * lat_step;
            let west = bbox.min_lng + col as f64 * lng_step;
            let east = bbox.min_lng + (col + 1) as f64 * lng_step;

            cells.push(GridCell {
                id: CellId::Index((row * cols + col) as u32),
                bounds: CellBounds { north, south, east, west },
                polygon: vec![
                    LatLng::new(south, west),
                    LatLng::new(north, west),
                    LatLng::new(north, east),
                    LatLng::new(south, east),
                    LatLng::new(south, west),
                ],
            });
        }
    }
    cells
}

/// Step across the boundary's bounding box in `cell_size_meters` increments
/// and keep the cells whose south-west anchor lies inside the boundary.
///
/// Meters convert to degrees with the flat-earth approximation (1 degree of
/// latitude ~ 111,320 m; longitude scaled by cos of the box's minimum
/// latitude). Cells are keyed by [`CellId::coord`] of their anchor. A
/// boundary with fewer than 3 points yields no cells.
pub fn generate_boundary_clipped_grid(boundary: &[LatLng], cell_size_meters: f64) -> Vec<GridCell> {
    if boundary.len() < 3 {
        return Vec::new();
    }
    let bbox = match bounding_box(boundary) {
        Some(bbox) => bbox,
        None => return Vec::new(),
    };

    let lat_step = meters_to_lat_degrees(cell_size_meters);
    let lng_step = meters_to_lng_degrees(cell_size_meters, bbox.min_lat);

    let mut cells = Vec::new();
    let mut lat = bbox.min_lat;
    while lat <= bbox.max_lat {
        let mut lng = bbox.min_lng;
        while lng <= bbox.max_lng {
            let anchor = LatLng::new(lat, lng);
            if point_in_polygon(anchor, boundary) {
                cells.push(GridCell {
                    id: CellId::coord(lat, lng),
                    bounds: CellBounds {
                        north: lat + lat_step,
                        south: lat,
                        east: lng + lng_step,
                        west: lng,
                    },
                    polygon: vec![
                        LatLng::new(lat, lng),
                        LatLng::new(lat + lat_step, lng),
                        LatLng::new(lat + lat_step, lng + lng_step),
                        LatLng::new(lat, lng + lng_step),
                        LatLng::new(lat, lng),
                    ],
                });
            }
            lng += lng_step;
        }
        lat += lat_step;
    }
    cells
}

/// How cells are laid out over a boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridStrategy {
    /// Equal subdivision of the boundary's bounding box
    Uniform { rows: usize, cols: usize },
    /// Fixed-size cells restricted to the boundary outline
    BoundaryClipped { cell_size_meters: f64 },
}

impl GridStrategy {
    /// Generate the cells for `boundary`. Fewer than 3 boundary points yields
    /// an empty cell set for either strategy.
    pub fn generate(&self, boundary: &[LatLng]) -> Vec<GridCell> {
        if boundary.len() < 3 {
            return Vec::new();
        }
        match *self {
            GridStrategy::Uniform { rows, cols } => match bounding_box(boundary) {
                Some(bbox) => generate_uniform_grid(&bbox, rows, cols),
                None => Vec::new(),
            },
            GridStrategy::BoundaryClipped { cell_size_meters } => {
                generate_boundary_clipped_grid(boundary, cell_size_meters)
            }
        }
    }
}

/// A requested change to grid dimensions.
///
/// These are pure functions over `(rows, cols)`; the caller re-derives cell
/// geometry from the result. Shrinking never drops below 1x1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridResize {
    InsertRow,
    DeleteRow,
    InsertColumn,
    DeleteColumn,
    /// Corner-drag resize: re-derive both dimensions from new physical extents
    Rederive { width_units: f64, height_units: f64, cell_size_units: f64 },
}

impl GridResize {
    pub fn apply(&self, rows: usize, cols: usize) -> (usize, usize) {
        match *self {
            GridResize::InsertRow => (rows + 1, cols),
            GridResize::DeleteRow => (rows.max(2) - 1, cols),
            GridResize::InsertColumn => (rows, cols + 1),
            GridResize::DeleteColumn => (rows, cols.max(2) - 1),
            GridResize::Rederive { width_units, height_units, cell_size_units } => {
                derive_rows_cols(width_units, height_units, cell_size_units)
            }
        }
    }
}
