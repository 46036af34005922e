pub mod feature;
pub mod garden;
pub mod geometry;
pub mod plan;

pub use feature::{Feature, FeatureDraft, FeatureId};
pub use garden::{Garden, GardenId, GridDimensions, GridSystem, Plant, PlantId, Zone, ZoneId};
pub use geometry::{BoundingBox, Boundary, LatLng};
pub use plan::{CellId, PlantRef, PlantedCell, Snapshot};
