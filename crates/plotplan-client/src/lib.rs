//! PlotPlan Client - REST and geocoding adapters
//!
//! Thin clients over the garden backend's JSON API plus a best-effort
//! geocoder. Network failures are non-fatal: callers retry by re-triggering
//! the operation, and batch decoding skips malformed entries instead of
//! aborting.

pub mod cache;
pub mod features;
pub mod gardens;
pub mod geocode;

pub use cache::FeatureCache;
pub use features::{decode_boundaries, FeatureApi, FeatureClient};
pub use gardens::{GardenClient, GardenDraft, GardenPatch, PlantDraft, ZoneDraft};
pub use geocode::{GeocodeResult, Geocoder};
