use anyhow::Result;
use plotplan_client::Geocoder;
use plotplan_core::config::PlanConfig;
use plotplan_store::GardenPlan;

use crate::cli::GeocodeArgs;
use crate::output::OutputWriter;

pub async fn execute(
    args: GeocodeArgs,
    config: &PlanConfig,
    plan: &mut GardenPlan,
    output: &OutputWriter,
) -> Result<()> {
    let geocoder = Geocoder::new(config.geocoder_url.value.clone());

    let Some(result) = geocoder.geocode(&args.address).await else {
        output.warning(format!("No location found for \"{}\"", args.address));
        return Ok(());
    };

    output.success(format!(
        "{} -> ({:.5}, {:.5})",
        result.display_name, result.lat, result.lng
    ));

    if !args.dry_run {
        plan.set_address(result.display_name, result.lat, result.lng)?;
        if config.persist_location.value {
            output.info("Location saved to the plan");
        } else {
            output.info("Location recorded in memory only (persist_location is off)");
        }
    }

    Ok(())
}
