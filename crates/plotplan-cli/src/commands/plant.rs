use anyhow::Result;
use plotplan_core::models::{CellId, PlantRef};
use plotplan_store::GardenPlan;

use crate::cli::{PlantArgs, RemoveArgs};
use crate::output::OutputWriter;

pub fn place(args: PlantArgs, plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    let cell_id = parse_cell(&args.cell);
    let replacing = plan.plant_at(&cell_id).map(|c| c.plant.name.clone());

    plan.add_plant(cell_id.clone(), PlantRef::new(args.plant_id, args.name.clone()), args.color)?;

    match replacing {
        Some(previous) => {
            output.success(format!("Replaced {previous} with {} in cell {cell_id}", args.name))
        }
        None => output.success(format!("Planted {} in cell {cell_id}", args.name)),
    }
    Ok(())
}

pub fn remove(args: RemoveArgs, plan: &mut GardenPlan, output: &OutputWriter) -> Result<()> {
    let cell_id = parse_cell(&args.cell);
    let occupant = plan.plant_at(&cell_id).map(|c| c.plant.name.clone());

    plan.remove_plant(&cell_id)?;

    match occupant {
        Some(name) => output.success(format!("Removed {name} from cell {cell_id}")),
        None => output.warning(format!("Cell {cell_id} was already empty")),
    }
    Ok(())
}

/// Numeric arguments address uniform-grid cells; anything else is a
/// boundary-clipped "lat_lng" key.
fn parse_cell(raw: &str) -> CellId {
    match raw.parse::<u32>() {
        Ok(index) => CellId::Index(index),
        Err(_) => CellId::Coord(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_are_indices() {
        assert_eq!(parse_cell("42"), CellId::Index(42));
        assert_eq!(
            parse_cell("45.500000_-122.600000"),
            CellId::Coord("45.500000_-122.600000".to_string())
        );
    }
}
