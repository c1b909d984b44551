//! In-memory store with a manual clock
//!
//! Mirrors how the browser treats cookies: expired entries are dropped as
//! soon as the clock passes them, session entries stay until cleared.

use std::collections::BTreeMap;

use super::{Expiry, Store};
use crate::consts::DAY_MS;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    /// Absolute expiry (ms), `None` for session entries
    expires_at: Option<f64>,
}

impl Entry {
    fn is_live(&self, now_ms: f64) -> bool {
        self.expires_at.is_none_or(|at| at > now_ms)
    }
}

/// Key/value jar kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Entry>,
    now_ms: f64,
}

impl MemoryStore {
    /// Empty store with the clock at the epoch
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with the clock at `now_ms`
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            entries: BTreeMap::new(),
            now_ms,
        }
    }

    /// Move the clock forward, dropping entries that expire on the way
    pub fn advance_days(&mut self, days: f64) {
        self.now_ms += days * DAY_MS;
        self.purge_expired();
    }

    /// Names of all live entries, in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn purge_expired(&mut self) {
        let now_ms = self.now_ms;
        self.entries.retain(|_, e| e.is_live(now_ms));
    }
}

impl Store for MemoryStore {
    fn read(&self, name: &str) -> Option<String> {
        self.entries
            .get(name)
            .filter(|e| e.is_live(self.now_ms))
            .map(|e| e.value.clone())
    }

    fn write(&mut self, name: &str, value: &str, expiry: Expiry) {
        self.purge_expired();
        let expires_at = expiry.expires_at(self.now_ms);
        if expires_at.is_some_and(|at| at <= self.now_ms) {
            self.entries.remove(name);
            return;
        }
        self.entries.insert(
            name.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    fn clear_all(&mut self) {
        self.entries.clear();
    }
}
