//! In-memory note storage and id assignment.
//!
//! # Lifecycle
//!
//! 1. At startup `main` builds a [`NoteStore`], seeded with [`seed_notes`]
//!    unless seeding is disabled in configuration.
//! 2. The store handle lives in [`AppState`](crate::server::state::AppState)
//!    and is cloned into every request.
//! 3. Nothing is persisted; the collection resets when the process restarts.
//!
//! # Invariants
//!
//! - Ids are unique and assigned as `max(existing) + 1` (or 1 when empty).
//! - Listing returns notes in insertion order.
//! - Stored notes are never mutated or removed.

pub mod notes;

pub use notes::{NewNote, NoteStore};

use common::Note;

/// The two demo notes present when the service starts.
pub fn seed_notes() -> Vec<Note> {
    vec![
        Note {
            id: 1,
            resident_name: "Alice Johnson".into(),
            date_time: "2024-09-17T10:30:00Z".into(),
            content: "Medication administered as scheduled.".into(),
            author_name: "Nurse Smith".into(),
        },
        Note {
            id: 2,
            resident_name: "Bob Williams".into(),
            date_time: "2024-09-17T11:45:00Z".into(),
            content: "Assisted with physical therapy exercises.".into(),
            author_name: "Dr. Brown".into(),
        },
    ]
}
