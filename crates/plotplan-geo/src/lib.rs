//! PlotPlan Geo - Grid geometry and spatial operations
//!
//! This crate derives discrete planting grids from boundary polygons:
//! bounding boxes, point-in-polygon membership, uniform and boundary-clipped
//! cell generation, pure grid resize operations, and GeoJSON conversions.

pub mod convert;
pub mod grid;
pub mod spatial;
