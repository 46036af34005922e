//! Feature CRUD against the backend's `/features` endpoints.

use async_trait::async_trait;
use plotplan_core::models::{Boundary, Feature, FeatureDraft, FeatureId};
use plotplan_core::{PlotplanError, Result};
use plotplan_geo::convert::boundary_from_geojson;

/// Port for the feature API, so UIs and tests can substitute a double
#[async_trait]
pub trait FeatureApi: Send + Sync {
    /// List all features belonging to a garden
    async fn list(&self, garden_id: u64) -> Result<Vec<Feature>>;

    /// Create a feature
    async fn create(&self, draft: &FeatureDraft) -> Result<Feature>;

    /// Replace a feature's name/boundary/color
    async fn update(&self, id: FeatureId, draft: &FeatureDraft) -> Result<Feature>;

    /// Delete a feature
    async fn delete(&self, id: FeatureId) -> Result<()>;
}

/// reqwest-backed [`FeatureApi`] implementation
pub struct FeatureClient {
    base_url: String,
    client: reqwest::Client,
}

impl FeatureClient {
    /// Create a client rooted at the API base URL (e.g. `http://host/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), client: reqwest::Client::new() }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/features{}", self.base_url, suffix)
    }
}

#[async_trait]
impl FeatureApi for FeatureClient {
    async fn list(&self, garden_id: u64) -> Result<Vec<Feature>> {
        let response = self
            .client
            .get(self.url(""))
            .query(&[("garden_id", garden_id)])
            .send()
            .await
            .map_err(|e| transport_error("features", e))?;

        into_json(response).await
    }

    async fn create(&self, draft: &FeatureDraft) -> Result<Feature> {
        let response = self
            .client
            .post(self.url(""))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("features", e))?;

        into_json(response).await
    }

    async fn update(&self, id: FeatureId, draft: &FeatureDraft) -> Result<Feature> {
        let response = self
            .client
            .put(self.url(&format!("/{}", id.0)))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error("features", e))?;

        into_json(response).await
    }

    async fn delete(&self, id: FeatureId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/{}", id.0)))
            .send()
            .await
            .map_err(|e| transport_error("features", e))?;

        check_status(response).await?;
        Ok(())
    }
}

/// Map a transport-level failure to a non-fatal service error
pub(crate) fn transport_error(service: &str, e: reqwest::Error) -> PlotplanError {
    PlotplanError::ServiceUnavailable { service: service.to_string(), reason: e.to_string() }
}

/// Reject non-2xx responses, carrying the body as the message
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    Err(PlotplanError::Api { status, message })
}

/// Decode a checked response body as JSON
pub(crate) async fn into_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| PlotplanError::Serialization(format!("bad response body: {e}")))
}

/// Parse each feature's GeoJSON boundary, skipping (with a warning) any that
/// fail to parse so one malformed feature never aborts the whole render.
pub fn decode_boundaries(features: &[Feature]) -> Vec<(Feature, Boundary)> {
    features
        .iter()
        .filter_map(|feature| match boundary_from_geojson(&feature.boundary) {
            Ok(boundary) => Some((feature.clone(), boundary)),
            Err(e) => {
                tracing::warn!(
                    feature_id = feature.id.0,
                    feature_name = %feature.name,
                    error = %e,
                    "skipping feature with malformed boundary"
                );
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn feature(id: u64, boundary: &str) -> Feature {
        Feature {
            id: FeatureId(id),
            name: format!("feature-{id}"),
            boundary: boundary.to_string(),
            color: "#00ff00".to_string(),
            garden_id: 1,
            user_id: 1,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn feature_deserializes_from_api_shape() {
        let raw = r##"{
            "id": 7,
            "name": "lawn",
            "boundary": "{\"type\":\"Polygon\",\"coordinates\":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}",
            "color": "#00ff00",
            "garden_id": 2,
            "user_id": 3,
            "created_at": "2024-05-01T12:00:00Z"
        }"##;
        let parsed: Feature = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, FeatureId(7));
        assert_eq!(parsed.name, "lawn");
        assert_eq!(parsed.garden_id, 2);
    }

    #[test]
    fn decode_skips_malformed_boundaries() {
        let good =
            r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[10.0,0.0],[10.0,10.0],[0.0,0.0]]]}"#;
        let features = vec![
            feature(1, good),
            feature(2, "definitely not geojson"),
            feature(3, r#"{"type":"Point","coordinates":[0.0,0.0]}"#),
        ];

        let decoded = decode_boundaries(&features);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].0.id, FeatureId(1));
        assert_eq!(decoded[0].1.len(), 3);
    }

    #[test]
    fn client_builds_feature_urls() {
        let client = FeatureClient::new("http://localhost:8000/api");
        assert_eq!(client.url(""), "http://localhost:8000/api/features");
        assert_eq!(client.url("/5"), "http://localhost:8000/api/features/5");
    }

    /// A canned [`FeatureApi`] standing in for the backend
    struct StaticApi {
        features: Vec<Feature>,
    }

    #[async_trait]
    impl FeatureApi for StaticApi {
        async fn list(&self, garden_id: u64) -> Result<Vec<Feature>> {
            Ok(self.features.iter().filter(|f| f.garden_id == garden_id).cloned().collect())
        }

        async fn create(&self, draft: &FeatureDraft) -> Result<Feature> {
            let mut created = feature(99, &draft.boundary);
            created.name = draft.name.clone();
            Ok(created)
        }

        async fn update(&self, _id: FeatureId, _draft: &FeatureDraft) -> Result<Feature> {
            Err(PlotplanError::Api { status: 404, message: "not found".to_string() })
        }

        async fn delete(&self, _id: FeatureId) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn port_accepts_a_test_double() {
        let api = StaticApi { features: vec![feature(1, "{}"), feature(2, "{}")] };

        let listed = api.list(1).await.unwrap();
        assert_eq!(listed.len(), 2);

        let draft = FeatureDraft {
            name: "beds".to_string(),
            boundary: "{}".to_string(),
            color: "#8bc34a".to_string(),
            garden_id: 1,
            user_id: 1,
        };
        assert_eq!(api.create(&draft).await.unwrap().name, "beds");
        assert!(api.update(FeatureId(1), &draft).await.is_err());
    }
}
