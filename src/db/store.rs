// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory activity repository.
//!
//! Provides typed operations for:
//! - Inserting activities (ids assigned here)
//! - Lookup, listing by type, replacement and deletion
//! - Atomic in-place edits of a single activity

use crate::models::{Activity, ActivityType};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared activity store. Cloning is cheap and clones share data.
#[derive(Clone, Default)]
pub struct ActivityStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    activities: DashMap<u64, Activity>,
    last_id: AtomicU64,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new activity, assigning it the next id.
    pub fn insert(&self, mut activity: Activity) -> Activity {
        let id = self.inner.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        activity.id = id;
        self.inner.activities.insert(id, activity.clone());
        tracing::debug!(activity_id = id, "Activity stored");
        activity
    }

    pub fn get(&self, id: u64) -> Option<Activity> {
        self.inner.activities.get(&id).map(|entry| entry.clone())
    }

    /// All activities, optionally of one type, ordered by id.
    pub fn list(&self, activity_type: Option<ActivityType>) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .inner
            .activities
            .iter()
            .filter(|entry| activity_type.map_or(true, |t| entry.activity_type() == t))
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by_key(|a| a.id);
        activities
    }

    /// Run `edit` against the stored activity while holding its entry lock.
    ///
    /// Returns `None` when no activity has this id.
    pub fn update<F, R>(&self, id: u64, edit: F) -> Option<R>
    where
        F: FnOnce(&mut Activity) -> R,
    {
        self.inner
            .activities
            .get_mut(&id)
            .map(|mut entry| edit(entry.value_mut()))
    }

    pub fn remove(&self, id: u64) -> Option<Activity> {
        self.inner.activities.remove(&id).map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.inner.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.activities.is_empty()
    }
}
