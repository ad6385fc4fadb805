//! Rich-text formatting: the command catalogue, keyboard shortcuts, and the
//! floating toolbar's visibility state.
//!
//! Commands map one-to-one onto `document.execCommand` names; the host runs
//! them against the focused content editor. The toolbar is a single floating
//! element shared by all notes. It appears while a note's content is hovered
//! or focused and fades out shortly after both the content and the toolbar
//! lose the pointer.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde::{Deserialize, Serialize};

use crate::consts::{TOOLBAR_FADE_MS, TOOLBAR_HIDE_DELAY_MS};
use crate::doc::NoteId;
use crate::input::{Key, Modifiers};

/// A rich-text command understood by the content editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    InsertUnorderedList,
    InsertOrderedList,
    Subscript,
    Superscript,
    RemoveFormat,
}

/// Toolbar buttons, grouped; the host draws a separator between groups.
pub const TOOLBAR_LAYOUT: &[&[FormatCommand]] = &[
    &[FormatCommand::Bold, FormatCommand::Italic, FormatCommand::Underline, FormatCommand::StrikeThrough],
    &[FormatCommand::JustifyLeft, FormatCommand::JustifyCenter, FormatCommand::JustifyRight],
    &[FormatCommand::InsertUnorderedList, FormatCommand::InsertOrderedList],
    &[FormatCommand::Subscript, FormatCommand::Superscript],
    &[FormatCommand::RemoveFormat],
];

impl FormatCommand {
    /// Every command, in toolbar order.
    pub const ALL: [FormatCommand; 12] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::StrikeThrough,
        Self::JustifyLeft,
        Self::JustifyCenter,
        Self::JustifyRight,
        Self::InsertUnorderedList,
        Self::InsertOrderedList,
        Self::Subscript,
        Self::Superscript,
        Self::RemoveFormat,
    ];

    /// The `document.execCommand` name.
    #[must_use]
    pub fn exec_name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::StrikeThrough => "strikeThrough",
            Self::JustifyLeft => "justifyLeft",
            Self::JustifyCenter => "justifyCenter",
            Self::JustifyRight => "justifyRight",
            Self::InsertUnorderedList => "insertUnorderedList",
            Self::InsertOrderedList => "insertOrderedList",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::RemoveFormat => "removeFormat",
        }
    }

    /// Parse a `data-command` attribute value.
    #[must_use]
    pub fn from_exec_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.exec_name() == name)
    }

    /// Button face.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bold => "B",
            Self::Italic => "I",
            Self::Underline => "U",
            Self::StrikeThrough => "S",
            Self::JustifyLeft => "⬅",
            Self::JustifyCenter => "⬌",
            Self::JustifyRight => "➡",
            Self::InsertUnorderedList => "•",
            Self::InsertOrderedList => "1.",
            Self::Subscript => "X₂",
            Self::Superscript => "X²",
            Self::RemoveFormat => "⌫",
        }
    }

    /// Button tooltip.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Bold => "Bold (Ctrl+B)",
            Self::Italic => "Italic (Ctrl+I)",
            Self::Underline => "Underline (Ctrl+U)",
            Self::StrikeThrough => "Strikethrough",
            Self::JustifyLeft => "Align Left",
            Self::JustifyCenter => "Align Center",
            Self::JustifyRight => "Align Right",
            Self::InsertUnorderedList => "Bullet List",
            Self::InsertOrderedList => "Numbered List",
            Self::Subscript => "Subscript",
            Self::Superscript => "Superscript",
            Self::RemoveFormat => "Clear Formatting",
        }
    }
}

/// The formatting command bound to a key chord inside note content.
///
/// Ctrl or Meta plus B / I / U / L / E / R, case-insensitive.
#[must_use]
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<FormatCommand> {
    if !(modifiers.ctrl || modifiers.meta) {
        return None;
    }
    match key.0.to_lowercase().as_str() {
        "b" => Some(FormatCommand::Bold),
        "i" => Some(FormatCommand::Italic),
        "u" => Some(FormatCommand::Underline),
        "l" => Some(FormatCommand::JustifyLeft),
        "e" => Some(FormatCommand::JustifyCenter),
        "r" => Some(FormatCommand::JustifyRight),
        _ => None,
    }
}

/// Visibility phase of the floating toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolbarPhase {
    #[default]
    Hidden,
    Visible,
    /// Fading out; fully hidden at `hidden_at` unless shown again first.
    FadingOut { hidden_at: f64 },
}

/// A visibility change the host must render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarChange {
    Shown,
    FadeStarted,
    Hidden,
}

/// Floating toolbar state shared by all notes.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    phase: ToolbarPhase,
    active_note: Option<NoteId>,
    focused_note: Option<NoteId>,
    hovered: bool,
    hide_check_at: Option<f64>,
}

impl Toolbar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ToolbarPhase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, ToolbarPhase::Hidden)
    }

    /// The note whose content toolbar commands apply to.
    #[must_use]
    pub fn active_note(&self) -> Option<NoteId> {
        self.active_note
    }

    /// Pointer entered a note's content area.
    pub fn content_entered(&mut self, id: NoteId) -> Option<ToolbarChange> {
        self.active_note = Some(id);
        self.show()
    }

    /// Pointer left a note's content area. Leaving straight onto the toolbar
    /// keeps it up.
    pub fn content_left(&mut self, into_toolbar: bool, now_ms: f64) {
        if !into_toolbar {
            self.request_hide(now_ms);
        }
    }

    /// A note's content gained focus.
    pub fn content_focused(&mut self, id: NoteId) -> Option<ToolbarChange> {
        self.focused_note = Some(id);
        self.active_note = Some(id);
        self.show()
    }

    /// A note's content lost focus. Does not hide the toolbar by itself.
    pub fn content_blurred(&mut self, id: NoteId) {
        if self.focused_note == Some(id) {
            self.focused_note = None;
        }
    }

    /// Pointer pressed inside a note's content.
    pub fn content_pressed(&mut self, id: NoteId) {
        self.active_note = Some(id);
    }

    /// Pointer entered the toolbar.
    pub fn pointer_entered(&mut self) -> Option<ToolbarChange> {
        self.hovered = true;
        self.show()
    }

    /// Pointer left the toolbar.
    pub fn pointer_left(&mut self, now_ms: f64) {
        self.hovered = false;
        if self.focused_note.is_none() {
            self.request_hide(now_ms);
        }
    }

    /// The active note was deleted.
    pub fn forget(&mut self, id: NoteId) {
        if self.active_note == Some(id) {
            self.active_note = None;
        }
        if self.focused_note == Some(id) {
            self.focused_note = None;
        }
    }

    /// Advance timers. Returns the visibility change, if any.
    pub fn tick(&mut self, now_ms: f64) -> Option<ToolbarChange> {
        if let Some(at) = self.hide_check_at {
            if now_ms >= at {
                self.hide_check_at = None;
                if self.focused_note.is_none() && !self.hovered && self.phase == ToolbarPhase::Visible {
                    self.phase = ToolbarPhase::FadingOut { hidden_at: at + TOOLBAR_FADE_MS };
                    // The fade may already be over if the host ticked late.
                    return Some(self.finish_fade(now_ms).unwrap_or(ToolbarChange::FadeStarted));
                }
            }
        }
        self.finish_fade(now_ms)
    }

    fn finish_fade(&mut self, now_ms: f64) -> Option<ToolbarChange> {
        match self.phase {
            ToolbarPhase::FadingOut { hidden_at } if now_ms >= hidden_at => {
                self.phase = ToolbarPhase::Hidden;
                Some(ToolbarChange::Hidden)
            }
            _ => None,
        }
    }

    /// When the host should call [`Toolbar::tick`] next, if a timer is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            ToolbarPhase::FadingOut { hidden_at } => Some(hidden_at),
            _ => self.hide_check_at,
        }
    }

    fn show(&mut self) -> Option<ToolbarChange> {
        self.hide_check_at = None;
        if self.phase == ToolbarPhase::Visible {
            return None;
        }
        self.phase = ToolbarPhase::Visible;
        Some(ToolbarChange::Shown)
    }

    fn request_hide(&mut self, now_ms: f64) {
        if self.is_visible() {
            self.hide_check_at = Some(now_ms + TOOLBAR_HIDE_DELAY_MS);
        }
    }
}
