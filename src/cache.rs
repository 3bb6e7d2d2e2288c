//! Process-wide topic → URL cache
//!
//! The cache holds an immutable snapshot. Refreshes build a complete
//! replacement map off to the side and publish it in one step, so readers see
//! either the previous map or the new one, never a partial rebuild.

use std::sync::{Arc, RwLock};

use crate::topics::TopicMap;

/// Shared, swappable topic map
#[derive(Debug, Default)]
pub struct PageCache {
    current: RwLock<Option<Arc<TopicMap>>>,
}

impl PageCache {
    /// An empty cache; the first resolver call or refresh populates it
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if any map has been published
    pub fn snapshot(&self) -> Option<Arc<TopicMap>> {
        // A poisoned lock still holds a whole snapshot; writers only swap an Arc.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Replace the cached map wholesale and return the published snapshot
    pub fn publish(&self, map: TopicMap) -> Arc<TopicMap> {
        let snapshot = Arc::new(map);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::clone(&snapshot));
        snapshot
    }

    pub fn is_populated(&self) -> bool {
        self.snapshot().is_some()
    }
}
