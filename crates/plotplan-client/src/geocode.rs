//! Best-effort address geocoding via Nominatim (OpenStreetMap).
//!
//! No API key; failures degrade to "no location set" rather than erroring,
//! so a flaky geocoder never blocks the planner.

use serde::Deserialize;

use plotplan_core::{PlotplanError, Result};

use crate::features::transport_error;

/// A resolved address
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub display_name: String,
}

/// Nominatim-backed geocoder
pub struct Geocoder {
    endpoint: String,
    client: reqwest::Client,
}

// Nominatim's usage policy requires an identifying User-Agent
const USER_AGENT: &str = "plotplan/0.1 (garden planner)";

impl Geocoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), client: reqwest::Client::new() }
    }

    /// Geocoder against the public Nominatim instance
    pub fn nominatim() -> Self {
        Self::new("https://nominatim.openstreetmap.org/search")
    }

    /// Resolve a free-text address to a coordinate.
    ///
    /// `None` means "no location": either the service had no match or the
    /// lookup failed; failures are logged and swallowed.
    pub async fn geocode(&self, address: &str) -> Option<GeocodeResult> {
        match self.try_geocode(address).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(address, error = %e, "geocoding failed");
                None
            }
        }
    }

    async fn try_geocode(&self, address: &str) -> Result<Option<GeocodeResult>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", address), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| transport_error("geocoder", e))?;

        let response = crate::features::check_status(response).await?;
        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| PlotplanError::Serialization(format!("bad geocoder body: {e}")))?;

        let Some(place) = places.into_iter().next() else {
            return Ok(None);
        };
        Ok(Some(place.into_result()?))
    }
}

/// One entry of Nominatim's search response; coordinates arrive as strings
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimPlace {
    fn into_result(self) -> Result<GeocodeResult> {
        let lat = self.lat.parse::<f64>().map_err(|_| PlotplanError::Serialization(
            format!("geocoder returned non-numeric latitude '{}'", self.lat),
        ))?;
        let lng = self.lon.parse::<f64>().map_err(|_| PlotplanError::Serialization(
            format!("geocoder returned non-numeric longitude '{}'", self.lon),
        ))?;
        Ok(GeocodeResult { lat, lng, display_name: self.display_name })
    }
}
