//! Session-scoped memoization of view-models.
//!
//! The cache is an explicit store handed by reference into the view
//! builders, never ambient state. Entries live for the lifetime of the
//! session that owns the store: memoize once per key, no TTL, no size
//! bound, no eviction.

use std::collections::HashMap;
use std::hash::Hash;

use crate::stats_api::models::StatGroup;
use crate::stats_api::views::{CareerRow, PlayerProfile, TeamInfo, TeamRoster};

/// A memoizing key-value map: `get_or_build` invokes the builder at most
/// once per key and returns the stored value afterwards.
#[derive(Debug, Clone)]
pub struct MemoMap<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> MemoMap<K, V> {
    pub fn new() -> Self {
        MemoMap {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value if present under `key`; otherwise invokes
    /// `build`, stores the result, and returns it.
    pub fn get_or_build<F>(&mut self, key: K, build: F) -> &V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(build)
    }

    /// Looks up a key without building. Async builders use this paired with
    /// [`MemoMap::insert`], which is the same memoize-once contract split
    /// around an await point.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for MemoMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-session store of built view-models, keyed by team or player id.
/// One typed map per view-model kind keeps the key-space of the composite
/// "<id>-info" / "<id>-roster" / "<id>-career" convention without stringly
/// typed keys.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    pub team_info: MemoMap<i64, TeamInfo>,
    pub rosters: MemoMap<i64, TeamRoster>,
    pub players: MemoMap<i64, PlayerProfile>,
    pub careers: MemoMap<(i64, StatGroup), Vec<CareerRow>>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }
}
