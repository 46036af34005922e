//! In-memory storage adapter for development and testing.
//!
//! Uses `RwLock::unwrap()` intentionally. Lock poisoning only occurs when
//! another thread panicked while holding the lock, which is an unrecoverable
//! state. For real use, see [`crate::file::JsonFileStorage`].

use std::sync::{Arc, RwLock};

use plotplan_core::Result;

use crate::ports::{PersistedPlan, PlanStorage};

/// In-memory implementation of [`PlanStorage`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<RwLock<Option<PersistedPlan>>>,
}

impl MemoryStorage {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a persisted plan
    pub fn seeded(plan: PersistedPlan) -> Self {
        Self { slot: Arc::new(RwLock::new(Some(plan))) }
    }
}

impl PlanStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedPlan>> {
        Ok(self.slot.read().unwrap().clone())
    }

    fn save(&self, plan: &PersistedPlan) -> Result<()> {
        *self.slot.write().unwrap() = Some(plan.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotplan_core::models::LatLng;

    #[test]
    fn save_load_clear_cycle() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load().unwrap(), None);

        let plan = PersistedPlan {
            boundary: Some(vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)]),
            ..Default::default()
        };
        storage.save(&plan).unwrap();
        assert_eq!(storage.load().unwrap(), Some(plan));

        storage.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn clones_share_the_slot() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.save(&PersistedPlan::default()).unwrap();
        assert!(other.load().unwrap().is_some());
    }
}
