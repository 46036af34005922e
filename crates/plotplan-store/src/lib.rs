//! PlotPlan Store - The garden plan state store and its persistence adapters
//!
//! [`GardenPlan`] is the single source of truth for an in-progress plan:
//! boundary, planted cells, grid settings, and a bounded undo/redo history.
//! Every mutation writes the persisted subset of state through a
//! [`PlanStorage`] adapter (in-memory for tests, a single JSON file for real
//! use).

pub mod file;
pub mod memory;
pub mod plan;
pub mod ports;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use plan::{GardenPlan, GridSettings, PersistencePolicy};
pub use ports::{PersistedPlan, PlanStorage};
