//! Input model: gesture events, the gesture state machine, and per-note states.
//!
//! `InputState` is the single active gesture, tracked between pointer-down and
//! pointer-up. Only one gesture exists at a time, so at most one note is ever
//! dragged or resized. [`transition`] is a pure function from
//! `(state, event)` to the next state plus an [`Effect`] describing what the
//! engine must do with the document; it never touches the store, the clock or
//! the DOM.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::config::LayoutConfig;
use crate::doc::NoteId;
use crate::geom::{Point, Size, Viewport};
use crate::hit::{Hit, HitPart};
use crate::layout;

/// Keyboard/mouse modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// A keyboard key as reported by the browser (e.g. `"n"`, `"B"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Where keyboard focus was when a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    /// Anywhere outside a note's content editor.
    Page,
    /// Inside the content editor of the given note.
    Content(NoteId),
}

/// Visible interaction state of a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    Idle,
    Dragging,
    Resizing,
    /// Just released; not a snap target until the cooldown expires.
    Positioning,
}

/// The active gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The body was pressed; the press becomes a drag once the arm delay passes.
    Pressed {
        id: NoteId,
        /// Pointer offset from the note origin, kept for the whole drag.
        grab: Point,
        /// Note origin at press time.
        origin: Point,
        /// Host time of the pointer-down.
        pressed_at: f64,
    },
    /// The note follows the pointer.
    Dragging {
        id: NoteId,
        /// Pointer offset from the note origin.
        grab: Point,
        /// Current clamped note origin.
        position: Point,
    },
    /// The note is being resized from its corner handle.
    Resizing {
        id: NoteId,
        /// Pointer position at the start of the resize.
        start_pointer: Point,
        /// Rendered size at the start of the resize.
        start_size: Size,
        /// Current size.
        size: Size,
    },
}

impl InputState {
    /// The note the gesture belongs to, if any.
    #[must_use]
    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            Self::Idle => None,
            Self::Pressed { id, .. } | Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// An input event fed to [`transition`]. Times are host milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on a classified part of a note.
    Down {
        hit: Hit,
        pointer: Point,
        /// Note origin at press time.
        origin: Point,
        /// Rendered note size at press time.
        size: Size,
        now_ms: f64,
    },
    /// Pointer moved anywhere on the page.
    Move { pointer: Point, viewport: Viewport, now_ms: f64 },
    /// Pointer released anywhere on the page.
    Up { now_ms: f64 },
    /// Timer wake-up with no pointer activity.
    Tick { now_ms: f64 },
}

impl InputEvent {
    fn now_ms(&self) -> f64 {
        match *self {
            Self::Down { now_ms, .. } | Self::Move { now_ms, .. } | Self::Up { now_ms } | Self::Tick { now_ms } => {
                now_ms
            }
        }
    }
}

/// What the engine must do as a result of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// A press was recorded; dragging arms after the delay.
    Pressed { id: NoteId },
    /// The press turned into a drag.
    DragStarted { id: NoteId },
    /// The dragged note moved to a clamped position.
    Moved { id: NoteId, position: Point },
    /// A drag ended at `position`; the engine snaps and persists.
    DragReleased { id: NoteId, position: Point },
    /// A press ended before the arm delay; nothing happens.
    PressCancelled { id: NoteId },
    /// A resize began.
    ResizeStarted { id: NoteId },
    /// The resized note changed size.
    Resized { id: NoteId, size: Size },
    /// A resize ended at `size`; the engine persists.
    ResizeReleased { id: NoteId, size: Size },
}

/// Next state plus the effects to apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: InputState,
    pub effects: Vec<Effect>,
}

impl Step {
    fn new(state: InputState, effect: Effect) -> Self {
        Self { state, effects: vec![effect] }
    }

    fn unchanged(state: &InputState) -> Self {
        Self { state: state.clone(), effects: Vec::new() }
    }
}

/// Advance the gesture state machine by one event.
#[must_use]
pub fn transition(state: &InputState, event: &InputEvent, config: &LayoutConfig) -> Step {
    // A press whose arm delay has elapsed is a drag for this and every later event.
    if let InputState::Pressed { id, grab, origin, pressed_at } = *state {
        if event.now_ms() - pressed_at >= config.drag_arm_delay_ms {
            let armed = InputState::Dragging { id, grab, position: origin };
            let mut step = transition(&armed, event, config);
            step.effects.insert(0, Effect::DragStarted { id });
            return step;
        }
    }

    match (state, *event) {
        (InputState::Idle, InputEvent::Down { hit, pointer, origin, size, now_ms }) => match hit.part {
            HitPart::Body => Step::new(
                InputState::Pressed { id: hit.note_id, grab: pointer.offset_from(origin), origin, pressed_at: now_ms },
                Effect::Pressed { id: hit.note_id },
            ),
            HitPart::ResizeHandle => Step::new(
                InputState::Resizing { id: hit.note_id, start_pointer: pointer, start_size: size, size },
                Effect::ResizeStarted { id: hit.note_id },
            ),
            HitPart::Control => Step::unchanged(state),
        },

        (InputState::Pressed { id, .. }, InputEvent::Up { .. }) => {
            Step::new(InputState::Idle, Effect::PressCancelled { id: *id })
        }

        (InputState::Dragging { id, grab, .. }, InputEvent::Move { pointer, viewport, .. }) => {
            let position = layout::clamp_during_drag(pointer.offset_from(*grab), viewport, config);
            Step::new(InputState::Dragging { id: *id, grab: *grab, position }, Effect::Moved { id: *id, position })
        }
        (InputState::Dragging { id, position, .. }, InputEvent::Up { .. }) => {
            Step::new(InputState::Idle, Effect::DragReleased { id: *id, position: *position })
        }

        (InputState::Resizing { id, start_pointer, start_size, .. }, InputEvent::Move { pointer, .. }) => {
            let size = layout::resize(*start_size, *start_pointer, pointer, config);
            Step::new(
                InputState::Resizing { id: *id, start_pointer: *start_pointer, start_size: *start_size, size },
                Effect::Resized { id: *id, size },
            )
        }
        (InputState::Resizing { id, size, .. }, InputEvent::Up { .. }) => {
            Step::new(InputState::Idle, Effect::ResizeReleased { id: *id, size: *size })
        }

        // A gesture is already active, or the event means nothing in this state.
        _ => Step::unchanged(state),
    }
}
