use anyhow::Result;
use plotplan_geo::grid::GridStrategy;
use plotplan_geo::spatial::{bbox_extent_feet, bounding_box};
use plotplan_store::GardenPlan;

use crate::output::OutputWriter;

pub fn execute(plan: &GardenPlan, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        let grid = plan.grid();
        output.json_value(&serde_json::json!({
            "address": plan.address(),
            "center": plan.center(),
            "boundary_points": plan.boundary().map(|b| b.len()).unwrap_or(0),
            "planted_cells": plan.planted_cells().len(),
            "grid": { "visible": grid.visible, "rows": grid.rows, "cols": grid.cols },
            "history": {
                "snapshots": plan.history_len(),
                "can_undo": plan.can_undo(),
                "can_redo": plan.can_redo(),
            },
        }));
        return Ok(());
    }

    match plan.address() {
        Some(address) => output.info(format!("Location: {address}")),
        None => output.info("Location: not set"),
    }

    match plan.boundary() {
        Some(boundary) if boundary.is_usable() => {
            output.info(format!("Boundary: {} points", boundary.len()));
            if let Some(bbox) = bounding_box(boundary.points()) {
                let (width, height) = bbox_extent_feet(&bbox);
                output.info(format!("Extent: {width:.0} ft x {height:.0} ft"));
            }
        }
        Some(boundary) => {
            output.warning(format!("Boundary: {} points (need at least 3)", boundary.len()))
        }
        None => output.info("Boundary: not drawn"),
    }

    let grid = plan.grid();
    let cells = plan
        .boundary()
        .map(|b| {
            GridStrategy::Uniform { rows: grid.rows, cols: grid.cols }.generate(b.points()).len()
        })
        .unwrap_or(0);
    output.info(format!(
        "Grid: {}x{} ({} cells, {})",
        grid.rows,
        grid.cols,
        cells,
        if grid.visible { "visible" } else { "hidden" }
    ));

    output.info(format!("Planted cells: {}", plan.planted_cells().len()));
    output.info(format!(
        "History: {} snapshots (undo {}, redo {})",
        plan.history_len(),
        if plan.can_undo() { "available" } else { "-" },
        if plan.can_redo() { "available" } else { "-" },
    ));

    Ok(())
}
