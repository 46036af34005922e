use anyhow::{bail, Result};
use plotplan_geo::grid::GridStrategy;
use plotplan_store::GardenPlan;

use crate::cli::GridAction;
use crate::output::OutputWriter;

pub fn execute(action: GridAction, plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    match action {
        GridAction::Show => show(plan, output),
        GridAction::Toggle => {
            let visible = !plan.grid().visible;
            plan.set_grid_visible(visible)?;
            output.success(format!("Grid is now {}", if visible { "visible" } else { "hidden" }));
        }
        GridAction::Set { rows, cols } => {
            if rows == 0 || cols == 0 {
                bail!("grid dimensions must be at least 1x1");
            }
            plan.set_grid_dimensions(rows, cols)?;
            output.success(format!("Grid set to {rows}x{cols}"));
        }
        GridAction::AddRow => {
            plan.insert_row()?;
            output.success(format!("Grid is now {}x{}", plan.grid().rows, plan.grid().cols));
        }
        GridAction::RemoveRow => {
            plan.delete_row()?;
            output.success(format!("Grid is now {}x{}", plan.grid().rows, plan.grid().cols));
        }
        GridAction::AddCol => {
            plan.insert_column()?;
            output.success(format!("Grid is now {}x{}", plan.grid().rows, plan.grid().cols));
        }
        GridAction::RemoveCol => {
            plan.delete_column()?;
            output.success(format!("Grid is now {}x{}", plan.grid().rows, plan.grid().cols));
        }
        GridAction::Clipped { cell_size } => {
            if cell_size <= 0.0 {
                bail!("cell size must be positive, got {cell_size}");
            }
            let Some(boundary) = plan.boundary() else {
                output.warning("No boundary drawn; nothing to clip against");
                return Ok(());
            };
            let cells = GridStrategy::BoundaryClipped { cell_size_meters: cell_size }
                .generate(boundary.points());
            output.info(format!(
                "{} cells of {cell_size} m fit inside the boundary",
                cells.len()
            ));
        }
    }
    Ok(())
}

fn show(plan: &GardenPlan, output: &OutputWriter) {
    let grid = plan.grid();
    let cells = plan
        .boundary()
        .map(|b| {
            GridStrategy::Uniform { rows: grid.rows, cols: grid.cols }.generate(b.points()).len()
        })
        .unwrap_or(0);

    if output.is_json() {
        output.json_value(&serde_json::json!({
            "rows": grid.rows,
            "cols": grid.cols,
            "visible": grid.visible,
            "cells": cells,
        }));
        return;
    }

    output.info(format!(
        "Grid: {}x{} ({} cells, {})",
        grid.rows,
        grid.cols,
        cells,
        if grid.visible { "visible" } else { "hidden" }
    ));
    if cells == 0 {
        output.warning("Draw a boundary with at least 3 points to generate cells");
    }
}
