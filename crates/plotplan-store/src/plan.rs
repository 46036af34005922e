//! The garden plan state store.
//!
//! Explicitly constructed and handed a storage adapter - there is no global
//! instance. All mutations are synchronous; persistence happens inline after
//! each mutating call. Only storage failures surface as errors; the store's
//! own contract never raises.

use std::sync::Arc;

use plotplan_core::config::PlanConfig;
use plotplan_core::models::{Boundary, CellId, LatLng, PlantRef, PlantedCell, Snapshot};
use plotplan_core::Result;

use crate::ports::{PersistedPlan, PlanStorage};

/// What the store writes through its storage adapter.
///
/// `persist_location` and `clear_preserves_location` are product decisions
/// surfaced as configuration; see [`PlanConfig`].
#[derive(Debug, Clone, Copy)]
pub struct PersistencePolicy {
    /// Include address/center in the persisted blob
    pub persist_location: bool,
    /// Keep address/center in memory across a full reset
    pub clear_preserves_location: bool,
    /// Undo/redo history capacity; oldest snapshots are evicted beyond it
    pub max_history: usize,
}

impl Default for PersistencePolicy {
    fn default() -> Self {
        Self { persist_location: false, clear_preserves_location: true, max_history: 50 }
    }
}

impl From<&PlanConfig> for PersistencePolicy {
    fn from(config: &PlanConfig) -> Self {
        Self {
            persist_location: config.persist_location.value,
            clear_preserves_location: config.clear_preserves_location.value,
            max_history: config.max_history.value.max(1),
        }
    }
}

/// Grid overlay settings carried by the plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSettings {
    pub visible: bool,
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { visible: false, rows: 6, cols: 6 }
    }
}

/// Single source of truth for the in-progress garden plan
pub struct GardenPlan {
    address: Option<String>,
    center: Option<LatLng>,
    boundary: Option<Boundary>,
    planted_cells: Vec<PlantedCell>,
    history: Vec<Snapshot>,
    cursor: usize,
    grid: GridSettings,
    storage: Arc<dyn PlanStorage>,
    policy: PersistencePolicy,
}

impl GardenPlan {
    /// Construct a plan from whatever the storage adapter holds.
    ///
    /// A missing blob starts an empty plan; an unreadable one is logged and
    /// discarded rather than propagated, so a corrupt file never locks the
    /// user out of the planner.
    pub fn load(storage: Arc<dyn PlanStorage>, policy: PersistencePolicy) -> Self {
        let persisted = match storage.load() {
            Ok(persisted) => persisted,
            Err(e) => {
                tracing::warn!(error = %e, "persisted plan unreadable, starting fresh");
                None
            }
        };

        let mut plan = Self {
            address: None,
            center: None,
            boundary: None,
            planted_cells: Vec::new(),
            history: Vec::new(),
            cursor: 0,
            grid: GridSettings::default(),
            storage,
            policy,
        };

        if let Some(persisted) = persisted {
            plan.boundary = persisted.boundary.map(Boundary::new);
            plan.planted_cells = persisted.planted_cells;
            plan.address = persisted.address;
            plan.center = persisted.center;
            if let Some(rows) = persisted.grid_rows {
                plan.grid.rows = rows;
            }
            if let Some(cols) = persisted.grid_cols {
                plan.grid.cols = cols;
            }
            if let Some(visible) = persisted.is_grid_visible {
                plan.grid.visible = visible;
            }
        }

        plan.history = vec![plan.planted_cells.clone()];
        plan.cursor = 0;
        plan
    }

    /// Record the human-readable location and its coordinate.
    ///
    /// In-memory only under the default policy; when `persist_location` is
    /// set the location is written through storage immediately, like any
    /// other mutation.
    pub fn set_address(&mut self, address: impl Into<String>, lat: f64, lng: f64) -> Result<()> {
        self.address = Some(address.into());
        self.center = Some(LatLng::new(lat, lng));
        if self.policy.persist_location {
            self.persist()?;
        }
        Ok(())
    }

    /// Replace the boundary with the given ordered point list.
    ///
    /// An empty list clears the boundary. The store imposes no minimum point
    /// count; the drawing surface is expected to deliver usable polygons.
    pub fn set_boundary(&mut self, points: Vec<LatLng>) -> Result<()> {
        self.boundary = if points.is_empty() { None } else { Some(Boundary::new(points)) };
        self.persist()
    }

    pub fn clear_boundary(&mut self) -> Result<()> {
        self.boundary = None;
        self.persist()
    }

    /// Reset boundary, planted cells, and history, and delete the persisted
    /// blob. Address/center survive in memory when the policy says so.
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.boundary = None;
        self.planted_cells = Vec::new();
        self.history = vec![Vec::new()];
        self.cursor = 0;
        if !self.policy.clear_preserves_location {
            self.address = None;
            self.center = None;
        }
        self.storage.clear()
    }

    /// Upsert a planted cell: at most one entry per cell id, the newest wins
    pub fn add_plant(
        &mut self,
        cell_id: CellId,
        plant: PlantRef,
        color: impl Into<String>,
    ) -> Result<()> {
        let cell = PlantedCell { cell_id, plant, color: color.into() };
        match self.planted_cells.iter_mut().find(|c| c.cell_id == cell.cell_id) {
            Some(existing) => *existing = cell,
            None => self.planted_cells.push(cell),
        }
        self.push_history();
        self.persist()
    }

    /// Remove the planted cell with this id. Removing an absent id is a
    /// no-op, but it still records a history snapshot like any mutation.
    pub fn remove_plant(&mut self, cell_id: &CellId) -> Result<()> {
        self.planted_cells.retain(|c| &c.cell_id != cell_id);
        self.push_history();
        self.persist()
    }

    /// Step back one history snapshot. Returns false (and does nothing) at
    /// the beginning of history.
    pub fn undo(&mut self) -> Result<bool> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.cursor -= 1;
        self.planted_cells = self.history[self.cursor].clone();
        self.persist()?;
        Ok(true)
    }

    /// Step forward one history snapshot. Returns false (and does nothing) at
    /// the end of history.
    pub fn redo(&mut self) -> Result<bool> {
        if self.cursor + 1 >= self.history.len() {
            return Ok(false);
        }
        self.cursor += 1;
        self.planted_cells = self.history[self.cursor].clone();
        self.persist()?;
        Ok(true)
    }

    pub fn set_grid_visible(&mut self, visible: bool) -> Result<()> {
        self.grid.visible = visible;
        self.persist()
    }

    pub fn set_grid_dimensions(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.grid.rows = rows;
        self.grid.cols = cols;
        self.persist()
    }

    pub fn insert_row(&mut self) -> Result<()> {
        self.grid.rows += 1;
        self.persist()
    }

    /// Shrink by one row; a 1-row grid stays 1 row
    pub fn delete_row(&mut self) -> Result<()> {
        if self.grid.rows > 1 {
            self.grid.rows -= 1;
        }
        self.persist()
    }

    pub fn insert_column(&mut self) -> Result<()> {
        self.grid.cols += 1;
        self.persist()
    }

    /// Shrink by one column; a 1-column grid stays 1 column
    pub fn delete_column(&mut self) -> Result<()> {
        if self.grid.cols > 1 {
            self.grid.cols -= 1;
        }
        self.persist()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn center(&self) -> Option<LatLng> {
        self.center
    }

    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    pub fn planted_cells(&self) -> &[PlantedCell] {
        &self.planted_cells
    }

    pub fn plant_at(&self, cell_id: &CellId) -> Option<&PlantedCell> {
        self.planted_cells.iter().find(|c| &c.cell_id == cell_id)
    }

    pub fn grid(&self) -> GridSettings {
        self.grid
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Append the current planted cells as a new snapshot.
    ///
    /// Any redo entries beyond the cursor are discarded first (a new edit
    /// invalidates the undone future), then the oldest snapshot is evicted
    /// if capacity is exceeded. The cursor always lands on the new snapshot.
    fn push_history(&mut self) {
        self.history.truncate(self.cursor + 1);
        self.history.push(self.planted_cells.clone());
        if self.history.len() > self.policy.max_history {
            self.history.remove(0);
        }
        self.cursor = self.history.len() - 1;
    }

    fn persist(&self) -> Result<()> {
        let plan = PersistedPlan {
            boundary: self.boundary.as_ref().map(|b| b.points().to_vec()),
            planted_cells: self.planted_cells.clone(),
            address: if self.policy.persist_location { self.address.clone() } else { None },
            center: if self.policy.persist_location { self.center } else { None },
            grid_rows: Some(self.grid.rows),
            grid_cols: Some(self.grid.cols),
            is_grid_visible: Some(self.grid.visible),
        };
        self.storage.save(&plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    fn plan() -> (GardenPlan, MemoryStorage) {
        let storage = MemoryStorage::new();
        let plan = GardenPlan::load(Arc::new(storage.clone()), PersistencePolicy::default());
        (plan, storage)
    }

    fn tomato() -> PlantRef {
        PlantRef::new(1, "tomato")
    }

    #[test]
    fn add_plant_upserts_by_cell_id() {
        let (mut plan, _) = plan();
        plan.add_plant(CellId::Index(3), tomato(), "#f00").unwrap();
        plan.add_plant(CellId::Index(3), PlantRef::new(2, "basil"), "#0f0").unwrap();

        assert_eq!(plan.planted_cells().len(), 1);
        assert_eq!(plan.plant_at(&CellId::Index(3)).unwrap().plant.name, "basil");
    }

    #[test]
    fn remove_of_missing_cell_is_a_noop_snapshot() {
        let (mut plan, _) = plan();
        plan.remove_plant(&CellId::Index(9)).unwrap();
        assert!(plan.planted_cells().is_empty());
        // The no-op still appended a snapshot
        assert_eq!(plan.history_len(), 2);
        assert!(plan.can_undo());
    }

    #[test]
    fn undo_then_redo_round_trips() {
        let (mut plan, _) = plan();
        plan.add_plant(CellId::Index(0), tomato(), "#f00").unwrap();
        plan.add_plant(CellId::Index(1), tomato(), "#f00").unwrap();
        let before = plan.planted_cells().to_vec();

        assert!(plan.undo().unwrap());
        assert_eq!(plan.planted_cells().len(), 1);
        assert!(plan.redo().unwrap());
        assert_eq!(plan.planted_cells(), before.as_slice());
    }

    #[test]
    fn undo_at_start_and_redo_at_end_are_noops() {
        let (mut plan, _) = plan();
        assert!(!plan.undo().unwrap());
        assert!(!plan.redo().unwrap());

        plan.add_plant(CellId::Index(0), tomato(), "#f00").unwrap();
        assert!(!plan.redo().unwrap());
    }

    #[test]
    fn new_mutation_discards_redo_branch() {
        let (mut plan, _) = plan();
        plan.add_plant(CellId::Index(0), tomato(), "#f00").unwrap();
        plan.add_plant(CellId::Index(1), tomato(), "#f00").unwrap();
        plan.undo().unwrap();

        plan.add_plant(CellId::Index(2), tomato(), "#f00").unwrap();
        // The undone future is gone
        assert!(!plan.redo().unwrap());
        assert!(plan.plant_at(&CellId::Index(2)).is_some());
        assert!(plan.plant_at(&CellId::Index(1)).is_none());
    }

    #[test]
    fn history_is_capped_with_fifo_eviction() {
        let storage = MemoryStorage::new();
        let policy = PersistencePolicy { max_history: 50, ..Default::default() };
        let mut plan = GardenPlan::load(Arc::new(storage), policy);

        for i in 0..200 {
            plan.add_plant(CellId::Index(i), tomato(), "#f00").unwrap();
            assert!(plan.history_len() <= 50);
        }
        assert_eq!(plan.history_len(), 50);
        // Cursor stays valid and undo still works after eviction
        assert!(plan.can_undo());
        assert!(plan.undo().unwrap());
        assert_eq!(plan.planted_cells().len(), 199);
    }

    #[test]
    fn set_empty_boundary_then_clear_all_is_clean() {
        let (mut plan, storage) = plan();
        plan.set_boundary(Vec::new()).unwrap();
        plan.clear_all_data().unwrap();

        match storage.load().unwrap() {
            None => {}
            Some(persisted) => assert!(persisted.boundary.is_none()),
        }
    }

    #[test]
    fn clear_all_data_respects_location_policy() {
        let storage = MemoryStorage::new();
        let policy =
            PersistencePolicy { clear_preserves_location: true, ..Default::default() };
        let mut plan = GardenPlan::load(Arc::new(storage), policy);
        plan.set_address("12 Rose Ln", 45.5, -122.6).unwrap();
        plan.clear_all_data().unwrap();
        assert_eq!(plan.address(), Some("12 Rose Ln"));
        assert_eq!(plan.center(), Some(LatLng::new(45.5, -122.6)));

        let storage = MemoryStorage::new();
        let policy =
            PersistencePolicy { clear_preserves_location: false, ..Default::default() };
        let mut plan = GardenPlan::load(Arc::new(storage), policy);
        plan.set_address("12 Rose Ln", 45.5, -122.6).unwrap();
        plan.clear_all_data().unwrap();
        assert_eq!(plan.address(), None);
        assert_eq!(plan.center(), None);
    }

    #[test]
    fn location_is_persisted_only_when_policy_allows() {
        let storage = MemoryStorage::new();
        let mut plan =
            GardenPlan::load(Arc::new(storage.clone()), PersistencePolicy::default());
        plan.set_address("12 Rose Ln", 45.5, -122.6).unwrap();
        plan.set_boundary(vec![LatLng::new(0.0, 0.0)]).unwrap();

        let persisted = storage.load().unwrap().unwrap();
        assert_eq!(persisted.address, None);
        assert_eq!(persisted.center, None);

        let storage = MemoryStorage::new();
        let policy = PersistencePolicy { persist_location: true, ..Default::default() };
        let mut plan = GardenPlan::load(Arc::new(storage.clone()), policy);
        plan.set_address("12 Rose Ln", 45.5, -122.6).unwrap();
        plan.set_boundary(vec![LatLng::new(0.0, 0.0)]).unwrap();

        let persisted = storage.load().unwrap().unwrap();
        assert_eq!(persisted.address.as_deref(), Some("12 Rose Ln"));
        assert_eq!(persisted.center, Some(LatLng::new(45.5, -122.6)));
    }

    #[test]
    fn set_address_writes_through_when_policy_persists_location() {
        let storage = MemoryStorage::new();
        let policy = PersistencePolicy { persist_location: true, ..Default::default() };
        let mut plan = GardenPlan::load(Arc::new(storage.clone()), policy);
        plan.set_address("12 Rose Ln", 45.5, -122.6).unwrap();

        // The address survives a drop-and-reload with no other mutation
        let reloaded = GardenPlan::load(Arc::new(storage), policy);
        assert_eq!(reloaded.address(), Some("12 Rose Ln"));
        assert_eq!(reloaded.center(), Some(LatLng::new(45.5, -122.6)));
    }

    #[test]
    fn set_address_stays_in_memory_under_default_policy() {
        let (mut plan, storage) = plan();
        plan.set_address("12 Rose Ln", 45.5, -122.6).unwrap();

        assert_eq!(plan.address(), Some("12 Rose Ln"));
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn corrupt_state_file_loads_as_default_plan() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plan.json");
        std::fs::write(&path, "{not json").unwrap();

        let plan = GardenPlan::load(
            Arc::new(crate::JsonFileStorage::new(path)),
            PersistencePolicy::default(),
        );
        assert!(plan.boundary().is_none());
        assert!(plan.planted_cells().is_empty());
        assert_eq!(plan.history_len(), 1);
        assert!(!plan.can_undo());
    }

    #[test]
    fn grid_dimension_ops_floor_at_1() {
        let (mut plan, _) = plan();
        assert_eq!(plan.grid().rows, 6);

        plan.set_grid_dimensions(1, 1).unwrap();
        plan.delete_row().unwrap();
        plan.delete_column().unwrap();
        assert_eq!(plan.grid(), GridSettings { visible: false, rows: 1, cols: 1 });

        plan.insert_row().unwrap();
        plan.insert_column().unwrap();
        assert_eq!(plan.grid().rows, 2);
        assert_eq!(plan.grid().cols, 2);
    }

    #[test]
    fn reload_restores_persisted_subset() {
        let storage = MemoryStorage::new();
        let mut plan =
            GardenPlan::load(Arc::new(storage.clone()), PersistencePolicy::default());
        plan.set_boundary(vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 1.0),
            LatLng::new(1.0, 1.0),
        ])
        .unwrap();
        plan.add_plant(CellId::Index(0), tomato(), "#f00").unwrap();
        plan.set_grid_visible(true).unwrap();

        let reloaded =
            GardenPlan::load(Arc::new(storage), PersistencePolicy::default());
        assert_eq!(reloaded.boundary().map(|b| b.len()), Some(3));
        assert_eq!(reloaded.planted_cells().len(), 1);
        assert!(reloaded.grid().visible);
        // History restarts from the loaded state
        assert_eq!(reloaded.history_len(), 1);
        assert!(!reloaded.can_undo());
    }
}
