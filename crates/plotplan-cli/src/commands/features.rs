use std::collections::HashMap;

use anyhow::{bail, Result};
use plotplan_client::{decode_boundaries, FeatureApi, FeatureClient};
use plotplan_core::config::PlanConfig;
use plotplan_core::models::{FeatureDraft, FeatureId};
use plotplan_geo::convert::boundary_to_geojson;
use plotplan_store::GardenPlan;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::FeatureAction;
use crate::output::OutputWriter;

#[derive(Tabled, Serialize)]
struct FeatureRow {
    id: u64,
    name: String,
    color: String,
    points: String,
    created_at: String,
}

pub async fn execute(
    action: FeatureAction,
    config: &PlanConfig,
    plan: &GardenPlan,
    output: &OutputWriter,
) -> Result<()> {
    let client = FeatureClient::new(config.api_base_url.value.clone());

    match action {
        FeatureAction::List { garden_id } => {
            let features = client.list(garden_id).await?;
            if features.is_empty() {
                output.info(format!("Garden {garden_id} has no features"));
                return Ok(());
            }
            // Features with unparseable boundaries still list, marked "?"
            let point_counts: HashMap<_, _> = decode_boundaries(&features)
                .into_iter()
                .map(|(f, boundary)| (f.id, boundary.len()))
                .collect();
            let rows: Vec<FeatureRow> = features
                .iter()
                .map(|f| FeatureRow {
                    id: f.id.0,
                    name: f.name.clone(),
                    color: f.color.clone(),
                    points: point_counts
                        .get(&f.id)
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "?".to_string()),
                    created_at: f.created_at.to_rfc3339(),
                })
                .collect();
            output.table(&rows);
        }
        FeatureAction::Create { garden_id, user_id, name, color } => {
            let Some(boundary) = plan.boundary() else {
                bail!("no boundary drawn; set one with `plotplan boundary set` first");
            };
            let draft = FeatureDraft {
                name: name.clone(),
                boundary: boundary_to_geojson(boundary)?,
                color,
                garden_id,
                user_id,
            };
            let created = client.create(&draft).await?;
            output.success(format!("Created feature \"{name}\" with id {}", created.id.0));
        }
        FeatureAction::Delete { id } => {
            client.delete(FeatureId(id)).await?;
            output.success(format!("Deleted feature {id}"));
        }
    }

    Ok(())
}
