use anyhow::{bail, Result};
use plotplan_core::models::LatLng;
use plotplan_store::GardenPlan;

use crate::cli::BoundaryAction;
use crate::output::OutputWriter;

pub fn execute(action: BoundaryAction, plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    match action {
        BoundaryAction::Set { points } => {
            let parsed: Vec<LatLng> =
                points.iter().map(|raw| parse_point(raw)).collect::<Result<_>>()?;
            if parsed.len() < 3 {
                bail!("a boundary needs at least 3 points, got {}", parsed.len());
            }
            let count = parsed.len();
            plan.set_boundary(parsed)?;
            output.success(format!("Boundary set with {count} points"));
        }
        BoundaryAction::Clear => {
            plan.clear_boundary()?;
            output.success("Boundary cleared");
        }
    }
    Ok(())
}

/// Parse a "lat,lng" vertex argument
pub(crate) fn parse_point(raw: &str) -> Result<LatLng> {
    let Some((lat, lng)) = raw.split_once(',') else {
        bail!("expected \"lat,lng\", got \"{raw}\"");
    };
    let lat: f64 = lat.trim().parse().map_err(|_| {
        anyhow::anyhow!("expected a numeric latitude in \"{raw}\"")
    })?;
    let lng: f64 = lng.trim().parse().map_err(|_| {
        anyhow::anyhow!("expected a numeric longitude in \"{raw}\"")
    })?;
    Ok(LatLng::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vertex_arguments() {
        assert_eq!(parse_point("45.5,-122.6").unwrap(), LatLng::new(45.5, -122.6));
        assert_eq!(parse_point(" 0.0 , 10.0 ").unwrap(), LatLng::new(0.0, 10.0));
        assert!(parse_point("45.5").is_err());
        assert!(parse_point("north,west").is_err());
    }
}
