use log::{debug, info, warn};
use serde::Serialize;

use crate::config::Config;
use crate::doc::{Note, NoteId, NoteStore};
use crate::format::{self, FormatCommand, Toolbar, ToolbarChange};
use crate::geom::{Point, Size, Viewport};
use crate::hit::Hit;
use crate::input::{self, Effect, InputEvent, InputState, Key, KeyTarget, Modifiers, NoteState};
use crate::layout;
use crate::persistence::{self, KeyValueStore};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to apply to the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    NoteCreated(Note),
    NoteDeleted { id: NoteId },
    NoteMoved { id: NoteId, x: f64, y: f64 },
    NoteResized { id: NoteId, width: f64, height: f64 },
    DragStarted { id: NoteId },
    DragEnded { id: NoteId },
    ResizeStarted { id: NoteId },
    ResizeEnded { id: NoteId },
    PositioningStarted { id: NoteId },
    PositioningEnded { id: NoteId },
    FocusTitle { id: NoteId },
    ExecFormat { id: NoteId, command: FormatCommand },
    ShowToolbar { id: Option<NoteId> },
    FadeToolbar,
    HideToolbar,
    /// The note collection changed and must be written to storage.
    Persist,
    RenderNeeded,
}

/// Engine state and logic that does not depend on storage or the DOM.
///
/// Separated from `Engine` so it can be tested without a storage backend.
pub struct EngineCore {
    pub doc: NoteStore,
    pub input: InputState,
    pub toolbar: Toolbar,
    pub config: Config,
    pub viewport: Viewport,
    /// Notes in their post-release cooldown, with the time it ends.
    positioning: Vec<(NoteId, f64)>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            doc: NoteStore::new(),
            input: InputState::default(),
            toolbar: Toolbar::new(),
            config,
            viewport: Viewport::default(),
            positioning: Vec::new(),
        }
    }

    // --- Data inputs ---

    /// Replace the document with a loaded collection.
    pub fn load_notes(&mut self, notes: Vec<Note>) -> Vec<Action> {
        self.doc.load(notes);
        self.input = InputState::Idle;
        self.positioning.clear();
        vec![Action::RenderNeeded]
    }

    /// Update viewport dimensions.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Create an empty note near the top-right corner and focus its title.
    pub fn create_note(&mut self, timestamp: String) -> Vec<Action> {
        let origin = layout::new_note_origin(self.viewport, &self.config.layout);
        let note = self.doc.create(origin, timestamp);
        info!("created note {} at ({}, {})", note.id, note.x, note.y);
        let id = note.id;
        vec![Action::NoteCreated(note), Action::Persist, Action::RenderNeeded, Action::FocusTitle { id }]
    }

    /// Delete a note. Missing ids are a no-op.
    pub fn delete_note(&mut self, id: NoteId) -> Vec<Action> {
        if self.doc.delete(id).is_none() {
            return Vec::new();
        }
        info!("deleted note {id}");
        if self.input.note_id() == Some(id) {
            self.input = InputState::Idle;
        }
        self.positioning.retain(|(n, _)| *n != id);
        self.toolbar.forget(id);
        vec![Action::NoteDeleted { id }, Action::Persist, Action::RenderNeeded]
    }

    /// Commit the title typed into a note.
    pub fn update_title(&mut self, id: NoteId, title: String, timestamp: String) -> Vec<Action> {
        if self.doc.update_title(id, title, timestamp) { vec![Action::Persist] } else { Vec::new() }
    }

    /// Commit the HTML content of a note's editor.
    pub fn update_content(&mut self, id: NoteId, content: String, timestamp: String) -> Vec<Action> {
        if self.doc.update_content(id, content, timestamp) { vec![Action::Persist] } else { Vec::new() }
    }

    // --- Pointer input ---

    /// Pointer pressed on a note. `size` is the note's rendered size.
    pub fn on_pointer_down(&mut self, hit: Hit, pointer: Point, size: Size, now_ms: f64) -> Vec<Action> {
        let Some(note) = self.doc.get(hit.note_id) else {
            return Vec::new();
        };
        let origin = note.origin();
        self.step(&InputEvent::Down { hit, pointer, origin, size, now_ms }, now_ms)
    }

    /// Pointer moved anywhere on the page.
    pub fn on_pointer_move(&mut self, pointer: Point, now_ms: f64) -> Vec<Action> {
        self.step(&InputEvent::Move { pointer, viewport: self.viewport, now_ms }, now_ms)
    }

    /// Pointer released anywhere on the page.
    pub fn on_pointer_up(&mut self, now_ms: f64) -> Vec<Action> {
        self.step(&InputEvent::Up { now_ms }, now_ms)
    }

    /// Advance timers: drag arming, positioning cooldowns, toolbar fade.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        let mut actions = self.step(&InputEvent::Tick { now_ms }, now_ms);

        let mut ended = Vec::new();
        self.positioning.retain(|&(id, until)| {
            if now_ms >= until {
                ended.push(id);
                false
            } else {
                true
            }
        });
        actions.extend(ended.into_iter().map(|id| Action::PositioningEnded { id }));

        actions.extend(self.toolbar.tick(now_ms).map(|c| self.toolbar_action(c)));
        actions
    }

    fn step(&mut self, event: &InputEvent, now_ms: f64) -> Vec<Action> {
        let step = input::transition(&self.input, event, &self.config.layout);
        self.input = step.state;
        step.effects.into_iter().flat_map(|effect| self.apply_effect(effect, now_ms)).collect()
    }

    fn apply_effect(&mut self, effect: Effect, now_ms: f64) -> Vec<Action> {
        match effect {
            Effect::Pressed { id } => {
                debug!("note {id} pressed");
                Vec::new()
            }
            Effect::PressCancelled { id } => {
                debug!("note {id} released before drag armed");
                Vec::new()
            }
            Effect::DragStarted { id } => {
                debug!("note {id} drag started");
                vec![Action::DragStarted { id }]
            }
            Effect::Moved { id, position } => {
                self.doc.set_position(id, position);
                vec![Action::NoteMoved { id, x: position.x, y: position.y }]
            }
            Effect::DragReleased { id, position } => self.release(id, position, now_ms),
            Effect::ResizeStarted { id } => {
                debug!("note {id} resize started");
                vec![Action::ResizeStarted { id }]
            }
            Effect::Resized { id, size } => {
                self.doc.set_size(id, size);
                vec![Action::NoteResized { id, width: size.width, height: size.height }]
            }
            Effect::ResizeReleased { id, size } => {
                if !self.doc.set_size(id, size) {
                    return vec![Action::ResizeEnded { id }];
                }
                vec![
                    Action::NoteResized { id, width: size.width, height: size.height },
                    Action::ResizeEnded { id },
                    Action::Persist,
                ]
            }
        }
    }

    /// Snap a released note against its settled neighbours and start its cooldown.
    fn release(&mut self, id: NoteId, position: Point, now_ms: f64) -> Vec<Action> {
        if self.doc.get(id).is_none() {
            return vec![Action::DragEnded { id }];
        }

        let candidate = position.trunc();
        let others = self
            .doc
            .notes()
            .iter()
            .filter(|n| n.id != id && !self.is_positioning(n.id, now_ms))
            .map(|n| n.origin().trunc());
        let snap = layout::snap_on_release(candidate, others, &self.config.layout);

        if let Some(y) = snap.row {
            debug!("note {id} row snap: y {} -> {y}", candidate.y);
        }
        if let Some(x) = snap.column {
            debug!("note {id} column snap: x {} -> {x}", candidate.x);
        }

        let final_pos = snap.position;
        self.doc.set_position(id, final_pos);
        self.positioning.retain(|(n, _)| *n != id);
        self.positioning.push((id, now_ms + self.config.layout.positioning_cooldown_ms));

        vec![
            Action::DragEnded { id },
            Action::NoteMoved { id, x: final_pos.x, y: final_pos.y },
            Action::PositioningStarted { id },
            Action::Persist,
        ]
    }

    fn is_positioning(&self, id: NoteId, now_ms: f64) -> bool {
        self.positioning.iter().any(|&(n, until)| n == id && now_ms < until)
    }

    // --- Keyboard input ---

    /// Key pressed. Ctrl+N creates a note anywhere; formatting chords apply
    /// inside note content.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, target: KeyTarget, timestamp: String) -> Vec<Action> {
        if let KeyTarget::Content(id) = target {
            if let Some(command) = format::shortcut(key, modifiers) {
                if self.doc.get(id).is_some() {
                    return vec![Action::ExecFormat { id, command }];
                }
                return Vec::new();
            }
        }
        if modifiers.ctrl && key.0 == "n" {
            return self.create_note(timestamp);
        }
        Vec::new()
    }

    // --- Toolbar ---

    /// A toolbar button was clicked; the command targets the active note.
    pub fn on_format_clicked(&mut self, command: FormatCommand) -> Vec<Action> {
        match self.toolbar.active_note() {
            Some(id) if self.doc.get(id).is_some() => vec![Action::ExecFormat { id, command }],
            _ => Vec::new(),
        }
    }

    pub fn on_content_enter(&mut self, id: NoteId) -> Vec<Action> {
        let change = self.toolbar.content_entered(id);
        self.toolbar_actions(change)
    }

    pub fn on_content_leave(&mut self, into_toolbar: bool, now_ms: f64) -> Vec<Action> {
        self.toolbar.content_left(into_toolbar, now_ms);
        Vec::new()
    }

    pub fn on_content_focus(&mut self, id: NoteId) -> Vec<Action> {
        let change = self.toolbar.content_focused(id);
        self.toolbar_actions(change)
    }

    pub fn on_content_blur(&mut self, id: NoteId) {
        self.toolbar.content_blurred(id);
    }

    pub fn on_content_pointer_down(&mut self, id: NoteId) {
        self.toolbar.content_pressed(id);
    }

    pub fn on_toolbar_enter(&mut self) -> Vec<Action> {
        let change = self.toolbar.pointer_entered();
        self.toolbar_actions(change)
    }

    pub fn on_toolbar_leave(&mut self, now_ms: f64) -> Vec<Action> {
        self.toolbar.pointer_left(now_ms);
        Vec::new()
    }

    fn toolbar_actions(&self, change: Option<ToolbarChange>) -> Vec<Action> {
        change.map(|c| self.toolbar_action(c)).into_iter().collect()
    }

    fn toolbar_action(&self, change: ToolbarChange) -> Action {
        match change {
            ToolbarChange::Shown => Action::ShowToolbar { id: self.toolbar.active_note() },
            ToolbarChange::FadeStarted => Action::FadeToolbar,
            ToolbarChange::Hidden => Action::HideToolbar,
        }
    }

    // --- Queries ---

    /// Look up a note by id.
    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.doc.get(id)
    }

    /// All notes in render order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.doc.notes()
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> &InputState {
        &self.input
    }

    /// The interaction state of one note at `now_ms`.
    #[must_use]
    pub fn note_state(&self, id: NoteId, now_ms: f64) -> NoteState {
        match self.input {
            InputState::Dragging { id: active, .. } if active == id => NoteState::Dragging,
            InputState::Resizing { id: active, .. } if active == id => NoteState::Resizing,
            _ if self.is_positioning(id, now_ms) => NoteState::Positioning,
            _ => NoteState::Idle,
        }
    }

    /// The earliest time at which [`EngineCore::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        let arm = match self.input {
            InputState::Pressed { pressed_at, .. } => Some(pressed_at + self.config.layout.drag_arm_delay_ms),
            _ => None,
        };
        arm.into_iter()
            .chain(self.positioning.iter().map(|&(_, until)| until))
            .chain(self.toolbar.next_deadline())
            .reduce(f64::min)
    }
}

/// The full engine: `EngineCore` plus the storage backend it persists to.
pub struct Engine<S: KeyValueStore> {
    storage: S,
    pub core: EngineCore,
}

impl<S: KeyValueStore> Engine<S> {
    /// Create an engine and load any notes already in `storage`.
    pub fn open(storage: S, config: Config) -> Self {
        let mut core = EngineCore::new(config);
        let notes = persistence::load_notes(&storage, &core.config.storage_key);
        core.load_notes(notes);
        Self { storage, core }
    }

    /// Write the collection if any action asks for it, then hand the rest to the host.
    fn persist(&self, mut actions: Vec<Action>) -> Vec<Action> {
        if actions.contains(&Action::Persist) {
            actions.retain(|a| *a != Action::Persist);
            if let Err(e) = persistence::save_notes(&self.storage, &self.core.config.storage_key, self.core.notes()) {
                warn!("failed to save notes: {e}");
            }
        }
        actions
    }

    /// Direct access to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // --- Delegated inputs ---

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.core.set_viewport(width, height);
    }

    pub fn create_note(&mut self, timestamp: String) -> Vec<Action> {
        let actions = self.core.create_note(timestamp);
        self.persist(actions)
    }

    pub fn delete_note(&mut self, id: NoteId) -> Vec<Action> {
        let actions = self.core.delete_note(id);
        self.persist(actions)
    }

    pub fn update_title(&mut self, id: NoteId, title: String, timestamp: String) -> Vec<Action> {
        let actions = self.core.update_title(id, title, timestamp);
        self.persist(actions)
    }

    pub fn update_content(&mut self, id: NoteId, content: String, timestamp: String) -> Vec<Action> {
        let actions = self.core.update_content(id, content, timestamp);
        self.persist(actions)
    }

    pub fn on_pointer_down(&mut self, hit: Hit, pointer: Point, size: Size, now_ms: f64) -> Vec<Action> {
        let actions = self.core.on_pointer_down(hit, pointer, size, now_ms);
        self.persist(actions)
    }

    pub fn on_pointer_move(&mut self, pointer: Point, now_ms: f64) -> Vec<Action> {
        let actions = self.core.on_pointer_move(pointer, now_ms);
        self.persist(actions)
    }

    pub fn on_pointer_up(&mut self, now_ms: f64) -> Vec<Action> {
        let actions = self.core.on_pointer_up(now_ms);
        self.persist(actions)
    }

    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        let actions = self.core.tick(now_ms);
        self.persist(actions)
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, target: KeyTarget, timestamp: String) -> Vec<Action> {
        let actions = self.core.on_key_down(key, modifiers, target, timestamp);
        self.persist(actions)
    }

    pub fn on_format_clicked(&mut self, command: FormatCommand) -> Vec<Action> {
        self.core.on_format_clicked(command)
    }

    pub fn on_content_enter(&mut self, id: NoteId) -> Vec<Action> {
        self.core.on_content_enter(id)
    }

    pub fn on_content_leave(&mut self, into_toolbar: bool, now_ms: f64) -> Vec<Action> {
        self.core.on_content_leave(into_toolbar, now_ms)
    }

    pub fn on_content_focus(&mut self, id: NoteId) -> Vec<Action> {
        self.core.on_content_focus(id)
    }

    pub fn on_content_blur(&mut self, id: NoteId) {
        self.core.on_content_blur(id);
    }

    pub fn on_content_pointer_down(&mut self, id: NoteId) {
        self.core.on_content_pointer_down(id);
    }

    pub fn on_toolbar_enter(&mut self) -> Vec<Action> {
        self.core.on_toolbar_enter()
    }

    pub fn on_toolbar_leave(&mut self, now_ms: f64) -> Vec<Action> {
        self.core.on_toolbar_leave(now_ms)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.viewport
    }

    #[must_use]
    pub fn note_state(&self, id: NoteId, now_ms: f64) -> NoteState {
        self.core.note_state(id, now_ms)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        self.core.next_deadline()
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        self.core.notes()
    }

    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.core.note(id)
    }
}
