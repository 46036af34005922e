use anyhow::Result;
use plotplan_store::GardenPlan;

use crate::cli::ResetArgs;
use crate::output::OutputWriter;

/// Wipe the plan and its persisted file. Destructive, so it insists on --force.
pub fn execute(args: ResetArgs, plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    if !args.force {
        output.warning("This deletes the boundary, all plants, and the saved plan file");
        output.info("Re-run with --force to proceed");
        return Ok(());
    }

    plan.clear_all_data()?;
    output.success("Plan reset");
    if plan.address().is_some() {
        output.info("Location kept in memory (clear_preserves_location is on)");
    }
    Ok(())
}
