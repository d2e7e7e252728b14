//! Pending-table session store for delivery layers.
//!
//! Conversions are two-phase: a table is inferred when a file arrives, then
//! serialized later when the user picks a format. Between the two requests the
//! delivery layer owns the table, keyed by its own session identifier (chat
//! id, connection id, ...). [`SessionStore`] is that store, made explicit:
//! the core stays stateless and never touches it.
//!
//! The store holds at most one pending table per key, which is what makes the
//! "at most one concurrent conversion per pending table" caller discipline
//! easy to provide: process each key's requests sequentially and [`take`] the
//! table when serializing. The store itself takes no locks; wrap it in a
//! `Mutex` if the delivery layer is multi-threaded.
//!
//! [`take`]: SessionStore::take

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::Table;

/// Maps session keys to at most one pending [`Table`] each.
#[derive(Debug, Clone)]
pub struct SessionStore<K> {
    pending: HashMap<K, Table>,
}

impl<K> Default for SessionStore<K> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> SessionStore<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pending table for `key`, returning the table it replaced, if
    /// any. A new upload for the same session supersedes the old one.
    pub fn insert(&mut self, key: K, table: Table) -> Option<Table> {
        self.pending.insert(key, table)
    }

    /// Borrow the pending table for `key` without consuming it.
    pub fn get(&self, key: &K) -> Option<&Table> {
        self.pending.get(key)
    }

    /// Remove and return the pending table for `key`. Single-use: a second
    /// `take` for the same key returns `None` until a new table is inserted.
    pub fn take(&mut self, key: &K) -> Option<Table> {
        self.pending.remove(key)
    }

    /// Drop the pending table for `key` (the "cancel" action). Returns whether
    /// a table was actually pending.
    pub fn discard(&mut self, key: &K) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Whether a table is pending for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of sessions with a pending table.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no tables are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
