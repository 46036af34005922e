use anyhow::Result;
use plotplan_store::GardenPlan;

use crate::output::OutputWriter;

pub fn undo(plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    if plan.undo()? {
        output.success(format!("Undid last change ({} plants now)", plan.planted_cells().len()));
    } else {
        output.warning("Nothing to undo");
    }
    Ok(())
}

pub fn redo(plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    if plan.redo()? {
        output.success(format!("Redid change ({} plants now)", plan.planted_cells().len()));
    } else {
        output.warning("Nothing to redo");
    }
    Ok(())
}
