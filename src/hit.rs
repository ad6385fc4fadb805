#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::NoteId;

/// Which part of a note a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The note background; pressing here starts a drag.
    Body,
    /// The bottom-right resize corner.
    ResizeHandle,
    /// An interactive element (title, content, buttons, toolbar, timestamp)
    /// that keeps the pointer for itself.
    Control,
}

/// Result of classifying a pointer-down target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub note_id: NoteId,
    pub part: HitPart,
}

const CONTROL_CLASSES: [&str; 6] =
    ["note-title", "note-content", "delete-btn", "format-btn", "formatting-toolbar", "note-timestamp"];

/// Classify an event target from its space-separated `class` attribute.
///
/// Control classes take precedence over the resize corner, which takes
/// precedence over the note body. Targets with none of these classes (e.g.
/// the note header) return `None` and start no gesture.
#[must_use]
pub fn classify(class_name: &str) -> Option<HitPart> {
    let mut part = None;
    for class in class_name.split_whitespace() {
        if CONTROL_CLASSES.contains(&class) {
            return Some(HitPart::Control);
        }
        match class {
            "resize-corner" => part = Some(HitPart::ResizeHandle),
            "phantom-note" if part.is_none() => part = Some(HitPart::Body),
            _ => {}
        }
    }
    part
}

/// Classify a pointer-down on note `note_id`.
#[must_use]
pub fn hit_test(note_id: NoteId, class_name: &str) -> Option<Hit> {
    classify(class_name).map(|part| Hit { note_id, part })
}
