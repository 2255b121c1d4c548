//! NoteStore — in-memory note table
//!
//! Holds notes in insertion order next to the id counter, both behind a single
//! reader-writer lock. Reads take the shared side, mutations the exclusive
//! side. Every note handed out is a clone; callers never see the table itself.

use notes_types::{Note, NoteFields};
use parking_lot::RwLock;

struct NoteTable {
    notes: Vec<Note>,
    next_id: i64,
}

/// Thread-safe store of notes keyed by an auto-incrementing id.
pub struct NoteStore {
    table: RwLock<NoteTable>,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// Create an empty store. The first note gets id 1.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(NoteTable {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all notes in creation order.
    pub fn list(&self) -> Vec<Note> {
        self.table.read().notes.clone()
    }

    /// Number of live notes.
    pub fn len(&self) -> usize {
        self.table.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new note and return a copy of it.
    ///
    /// Accepts any strings; rejecting empty fields is up to the caller.
    pub fn create(&self, name: impl Into<String>, text: impl Into<String>) -> Note {
        let mut table = self.table.write();

        let note = Note {
            id: table.next_id,
            name: name.into(),
            text: text.into(),
        };
        table.next_id += 1;
        table.notes.push(note.clone());

        log::debug!("[NOTES] Created note {}", note.id);
        note
    }

    /// Copy of the note with the given id.
    pub fn get(&self, id: i64) -> Option<Note> {
        self.table.read().notes.iter().find(|n| n.id == id).cloned()
    }

    /// Overwrite the non-empty fields of `patch` onto the note with the given id.
    ///
    /// Returns the note as stored after the update, or `None` if there is no
    /// such note (in which case nothing changes).
    pub fn update(&self, id: i64, patch: &NoteFields) -> Option<Note> {
        let mut table = self.table.write();
        let note = table.notes.iter_mut().find(|n| n.id == id)?;

        if !patch.name.is_empty() {
            note.name = patch.name.clone();
        }
        if !patch.text.is_empty() {
            note.text = patch.text.clone();
        }

        log::debug!("[NOTES] Updated note {}", id);
        Some(note.clone())
    }

    /// Remove the note with the given id, keeping the order of the rest.
    ///
    /// Returns false if there was no such note.
    pub fn delete(&self, id: i64) -> bool {
        let mut table = self.table.write();

        match table.notes.iter().position(|n| n.id == id) {
            Some(index) => {
                table.notes.remove(index);
                log::debug!("[NOTES] Deleted note {}", id);
                true
            }
            None => false,
        }
    }
}
