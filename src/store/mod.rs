// Copyright (c) 2025 Notes MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! In-memory note store.
//!
//! The [`NoteStore`] maps note names to their text content. Every read goes
//! through a shared lock and every write through an exclusive lock, so a single
//! store can be handed to any number of threads behind an `Arc`.
//!
//! Notes are kept in a name-ordered map: listings and anything rendered from
//! them come out sorted by name.
//!
//! # Example
//!
//! ```
//! use notes_mcp_lib::store::NoteStore;
//!
//! let store = NoteStore::new();
//! store.set("groceries", "milk, eggs");
//!
//! assert_eq!(store.get("groceries").as_deref(), Some("milk, eggs"));
//! assert!(store.get("missing").is_none());
//! ```

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::trace;

/// A single stored note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique note name
    pub name: String,

    /// Note body
    pub content: String,
}

/// Concurrency-safe mapping from note name to note content.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<BTreeMap<String, String>>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the content stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        self.notes.read().get(name).cloned()
    }

    /// Inserts a note, replacing the content of an existing note with the same name.
    pub fn set(&self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        trace!(note = %name, "storing note");
        self.notes.write().insert(name, content.into());
    }

    /// Returns a snapshot of every note, ordered by name.
    ///
    /// The lock is released before the snapshot is returned.
    pub fn list(&self) -> Vec<Note> {
        self.notes
            .read()
            .iter()
            .map(|(name, content)| Note {
                name: name.clone(),
                content: content.clone(),
            })
            .collect()
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.read().len()
    }

    /// Returns true if no notes are stored.
    pub fn is_empty(&self) -> bool {
        self.notes.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_set_then_get() {
        let store = NoteStore::new();
        assert!(store.is_empty());

        store.set("a", "first");
        assert_eq!(store.get("a"), Some("first".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let store = NoteStore::new();
        store.set("a", "first");
        store.set("a", "second");

        assert_eq!(store.get("a"), Some("second".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_is_ordered_by_name() {
        let store = NoteStore::new();
        store.set("zeta", "z");
        store.set("alpha", "a");
        store.set("mid", "m");

        let names: Vec<String> = store.list().into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let store = Arc::new(NoteStore::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let store = store.clone();
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    store.set(format!("note-{t}-{i}"), format!("content {i}"));
                    let _ = store.list();
                    assert!(store.get(&format!("note-{t}-{i}")).is_some());
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 800);
    }
}
