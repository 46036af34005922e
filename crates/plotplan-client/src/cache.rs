//! Read-through cache of backend-owned features.
//!
//! The backend owns the data; this cache only mirrors the latest responses.
//! Two racing in-flight requests resolve last-write-wins - no ordering is
//! enforced, matching the single-user UI this backs.
//!
//! `RwLock::unwrap()` is intentional here; see the note on
//! `plotplan_store::memory`.

use std::collections::HashMap;
use std::sync::RwLock;

use plotplan_core::models::{Feature, FeatureId};

/// Last-write-wins mirror of the backend's features
#[derive(Debug, Default)]
pub struct FeatureCache {
    inner: RwLock<HashMap<FeatureId, Feature>>,
}

impl FeatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one feature from a create/update response
    pub fn insert(&self, feature: Feature) {
        self.inner.write().unwrap().insert(feature.id, feature);
    }

    /// Replace the cached set with a full list response
    pub fn replace_all(&self, features: Vec<Feature>) {
        let mut inner = self.inner.write().unwrap();
        inner.clear();
        inner.extend(features.into_iter().map(|f| (f.id, f)));
    }

    /// Drop one feature after a delete response
    pub fn remove(&self, id: FeatureId) {
        self.inner.write().unwrap().remove(&id);
    }

    pub fn get(&self, id: FeatureId) -> Option<Feature> {
        self.inner.read().unwrap().get(&id).cloned()
    }

    /// All cached features, in no particular order
    pub fn all(&self) -> Vec<Feature> {
        self.inner.read().unwrap().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}
