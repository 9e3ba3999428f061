//! [`NoteStore`]: the shared, ordered collection of care notes.

use std::sync::Arc;

use common::{Note, NoteId};
use tokio::sync::RwLock;

use super::seed_notes;

/// A fully resolved note that has not been assigned an id yet.
///
/// Produced by [`CreateNote::normalize`](crate::schema::CreateNote::normalize);
/// every field is already final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub resident_name: String,
    pub date_time: String,
    pub content: String,
    pub author_name: String,
}

impl NewNote {
    fn with_id(self, id: NoteId) -> Note {
        Note {
            id,
            resident_name: self.resident_name,
            date_time: self.date_time,
            content: self.content,
            author_name: self.author_name,
        }
    }
}

/// Thread-safe, insertion-ordered note collection.
///
/// Wraps an `Arc<RwLock<Vec<Note>>>` so that:
/// - Reads (`list_all`, `get_by_id`) share the lock and run concurrently.
/// - `add` holds the write lock across id computation and append, so two
///   concurrent creations can never observe the same maximum id.
#[derive(Clone, Debug, Default)]
pub struct NoteStore {
    inner: Arc<RwLock<Vec<Note>>>,
}

impl NoteStore {
    /// Create a new, empty [`NoteStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `notes`, kept in the given order.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(notes)),
        }
    }

    /// Create a store holding the demo seed notes.
    pub fn seeded() -> Self {
        Self::with_notes(seed_notes())
    }

    /// Return every note in insertion order.
    pub async fn list_all(&self) -> Vec<Note> {
        self.inner.read().await.clone()
    }

    /// Assign the next id to `note`, append it, and return the stored copy.
    pub async fn add(&self, note: NewNote) -> Note {
        let mut notes = self.inner.write().await;
        let id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let stored = note.with_id(id);
        notes.push(stored.clone());
        stored
    }

    /// Look up the first note whose id equals `id`.
    pub async fn get_by_id(&self, id: NoteId) -> Option<Note> {
        self.inner.read().await.iter().find(|n| n.id == id).cloned()
    }

    /// Number of notes currently stored.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
