//! Garden, zone, plant, and grid CRUD against the backend's nested routes.

use plotplan_core::models::{
    Garden, GardenId, GridSystem, LatLng, Plant, PlantId, Zone, ZoneId,
};
use plotplan_core::Result;
use serde::Serialize;

use crate::features::{check_status, into_json, transport_error};

/// Body for creating a garden
#[derive(Debug, Clone, Serialize)]
pub struct GardenDraft {
    pub name: String,
    pub address: String,
    pub boundary: Vec<LatLng>,
    pub center: LatLng,
}

/// Partial update body; absent fields are left untouched by the backend
#[derive(Debug, Clone, Default, Serialize)]
pub struct GardenPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Vec<LatLng>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
}

/// Body for creating or patching a zone
#[derive(Debug, Clone, Serialize)]
pub struct ZoneDraft {
    pub name: String,
    pub color: String,
    pub boundary: Vec<LatLng>,
}

/// Body for creating or patching a plant record
#[derive(Debug, Clone, Serialize)]
pub struct PlantDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    pub color: String,
}

/// Client for `/gardens` and its nested zone/plant/grid routes
pub struct GardenClient {
    base_url: String,
    client: reqwest::Client,
}

impl GardenClient {
    /// Create a client rooted at the API base URL (e.g. `http://host/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), client: reqwest::Client::new() }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/gardens{}", self.base_url, suffix)
    }

    pub async fn list_gardens(&self) -> Result<Vec<Garden>> {
        let response = self
            .client
            .get(self.url(""))
            .send()
            .await
            .map_err(|e| transport_error("gardens", e))?;
        into_json(response).await
    }

    pub async fn get_garden(&self, id: GardenId) -> Result<Garden> {
        let response = self
            .client
            .get(self.url(&format!("/{}", id.0)))
            .send()
            .await
            .map_err(|e| transport_error("gardens", e))?;
        into_json(response).await
    }

    pub async fn create_garden(&self, draft: &GardenDraft) -> Result<Garden> {
        let response = self
            .client
            .post(self.url(""))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("gardens", e))?;
        into_json(response).await
    }

    pub async fn update_garden(&self, id: GardenId, patch: &GardenPatch) -> Result<Garden> {
        let response = self
            .client
            .patch(self.url(&format!("/{}", id.0)))
            .json(patch)
            .send()
            .await
            .map_err(|e| transport_error("gardens", e))?;
        into_json(response).await
    }

    pub async fn delete_garden(&self, id: GardenId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{}", id.0)))
            .send()
            .await
            .map_err(|e| transport_error("gardens", e))?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn list_zones(&self, garden_id: GardenId) -> Result<Vec<Zone>> {
        let response = self
            .client
            .get(self.url(&format!("/{}/zones", garden_id.0)))
            .send()
            .await
            .map_err(|e| transport_error("zones", e))?;
        into_json(response).await
    }

    pub async fn create_zone(&self, garden_id: GardenId, draft: &ZoneDraft) -> Result<Zone> {
        let response = self
            .client
            .post(self.url(&format!("/{}/zones", garden_id.0)))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("zones", e))?;
        into_json(response).await
    }

    pub async fn update_zone(
        &self,
        garden_id: GardenId,
        zone_id: ZoneId,
        draft: &ZoneDraft,
    ) -> Result<Zone> {
        let response = self
            .client
            .patch(self.url(&format!("/{}/zones/{}", garden_id.0, zone_id.0)))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("zones", e))?;
        into_json(response).await
    }

    pub async fn delete_zone(&self, garden_id: GardenId, zone_id: ZoneId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{}/zones/{}", garden_id.0, zone_id.0)))
            .send()
            .await
            .map_err(|e| transport_error("zones", e))?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn list_plants(&self, garden_id: GardenId) -> Result<Vec<Plant>> {
        let response = self
            .client
            .get(self.url(&format!("/{}/plants", garden_id.0)))
            .send()
            .await
            .map_err(|e| transport_error("plants", e))?;
        into_json(response).await
    }

    pub async fn create_plant(&self, garden_id: GardenId, draft: &PlantDraft) -> Result<Plant> {
        let response = self
            .client
            .post(self.url(&format!("/{}/plants", garden_id.0)))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("plants", e))?;
        into_json(response).await
    }

    pub async fn update_plant(
        &self,
        garden_id: GardenId,
        plant_id: PlantId,
        draft: &PlantDraft,
    ) -> Result<Plant> {
        let response = self
            .client
            .patch(self.url(&format!("/{}/plants/{}", garden_id.0, plant_id.0)))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("plants", e))?;
        into_json(response).await
    }

    pub async fn delete_plant(&self, garden_id: GardenId, plant_id: PlantId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{}/plants/{}", garden_id.0, plant_id.0)))
            .send()
            .await
            .map_err(|e| transport_error("plants", e))?;
        check_status(response).await?;
        Ok(())
    }

    /// Fetch the backend-derived grid for a garden at the given cell size
    pub async fn get_grid(&self, garden_id: GardenId, grid_size: f64) -> Result<GridSystem> {
        let response = self
            .client
            .get(self.url(&format!("/{}/grid", garden_id.0)))
            .query(&[("grid_size", grid_size)])
            .send()
            .await
            .map_err(|e| transport_error("grid", e))?;
        into_json(response).await
    }
}
