//! Document model: notes and the in-memory store that owns them.
//!
//! This module defines [`Note`], the unit persisted to local storage and
//! rendered as a card, and [`NoteStore`], the single owner of the live note
//! collection. The store keeps insertion order because it is also render order
//! and, through that, the iteration order the snap pass depends on.
//!
//! Data flows into this layer from storage (JSON deserialization at startup)
//! and from the engine (mutations driven by input events). The persistence
//! layer reads the whole collection back out via [`NoteStore::notes`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Size};

/// Unique, monotonically assigned note identifier.
pub type NoteId = u64;

/// A note as stored in local storage and rendered on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, never reused within a store's lifetime.
    pub id: NoteId,
    /// Single-line title. Empty until the user types one.
    #[serde(default)]
    pub title: String,
    /// Rich-text body as HTML produced by the content editor.
    #[serde(default)]
    pub content: String,
    /// Left edge in viewport pixels.
    pub x: f64,
    /// Top edge in viewport pixels.
    pub y: f64,
    /// Explicit width after a resize; `None` uses the stylesheet default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit height after a resize; `None` uses the stylesheet default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Human-readable time of creation or last text edit.
    #[serde(default)]
    pub timestamp: String,
}

impl Note {
    /// Top-left corner of the note.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// In-memory store of notes, kept in insertion order.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    last_id: NoteId,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all notes with a loaded collection.
    ///
    /// The id counter resumes from the highest loaded id so new notes never
    /// collide with persisted ones.
    pub fn load(&mut self, notes: Vec<Note>) {
        self.last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        self.notes = notes;
    }

    /// Append a new empty note at `origin` and return a copy of it.
    pub fn create(&mut self, origin: Point, timestamp: String) -> Note {
        self.last_id += 1;
        let note = Note {
            id: self.last_id,
            title: String::new(),
            content: String::new(),
            x: origin.x,
            y: origin.y,
            width: None,
            height: None,
            timestamp,
        };
        self.notes.push(note.clone());
        note
    }

    /// Remove a note by id, returning it if it was present.
    pub fn delete(&mut self, id: NoteId) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(idx))
    }

    /// Replace a note's title and refresh its timestamp. Returns false if the note doesn't exist.
    pub fn update_title(&mut self, id: NoteId, title: String, timestamp: String) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        note.title = title;
        note.timestamp = timestamp;
        true
    }

    /// Replace a note's HTML content and refresh its timestamp. Returns false if the note doesn't exist.
    pub fn update_content(&mut self, id: NoteId, content: String, timestamp: String) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        note.content = content;
        note.timestamp = timestamp;
        true
    }

    /// Move a note. Returns false if the note doesn't exist.
    pub fn set_position(&mut self, id: NoteId, origin: Point) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        note.x = origin.x;
        note.y = origin.y;
        true
    }

    /// Record an explicit size. Returns false if the note doesn't exist.
    pub fn set_size(&mut self, id: NoteId, size: Size) -> bool {
        let Some(note) = self.get_mut(id) else {
            return false;
        };
        note.width = Some(size.width);
        note.height = Some(size.height);
        true
    }

    /// Return a reference to a note by id.
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    fn get_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    /// All notes in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The most recently assigned id (0 when nothing has been created or loaded).
    #[must_use]
    pub fn last_id(&self) -> NoteId {
        self.last_id
    }

    /// Number of notes currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if the store contains no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
