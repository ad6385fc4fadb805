//! wasm-bindgen facade for the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page script builds the DOM and forwards raw events here as plain
//! numbers and strings. Every handler returns the resulting actions as a JSON
//! array (`[{"type":"note_moved","id":1,"x":10,"y":20}, ...]`) which the script
//! applies to the page. Persistence is handled inside the engine, so the
//! script never touches `localStorage` itself.
//!
//! Note ids cross the boundary as `u32`; the counter starts at 1 and only
//! grows by one per created note.

use log::{Level, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::doc::NoteId;
use crate::engine::{Action, Engine};
use crate::error::StorageError;
use crate::fly::Fly;
use crate::format::{FormatCommand, TOOLBAR_LAYOUT};
use crate::geom::{Point, Size, Viewport};
use crate::hit;
use crate::input::{Key, KeyTarget, Modifiers, NoteState};
use crate::particles;
use crate::persistence::{KeyValueStore, MemoryStore};

/// Browser `localStorage`, or an in-memory map when it is unavailable
/// (private browsing, sandboxed iframes).
pub enum PageStorage {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl PageStorage {
    /// Open `window.localStorage`, falling back to memory.
    #[must_use]
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => Self::Local(storage),
            Err(e) => {
                warn!("{e}; notes will not survive a reload");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".into())),
        Err(e) => Err(StorageError::Unavailable(describe(&e))),
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl KeyValueStore for PageStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: describe(&e) }),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: describe(&e) }),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

#[derive(Serialize)]
struct ToolbarButton {
    command: FormatCommand,
    label: &'static str,
    title: &'static str,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!("failed to encode response: {e}");
            "null".to_owned()
        }
    }
}

fn emit(actions: &[Action]) -> String {
    to_json(actions)
}

/// The notes board, as seen from the page script.
#[wasm_bindgen]
pub struct PhantomNotes {
    engine: Engine<PageStorage>,
    fly: Fly,
    rng: SmallRng,
}

#[wasm_bindgen]
impl PhantomNotes {
    /// Load notes from storage and place the fly. `config` is an optional
    /// JSON document overriding the default tunables.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, config: Option<String>) -> Self {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(Level::Debug) {
            warn!("logger already initialised: {e}");
        }

        let config = match config.as_deref().map(Config::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("ignoring invalid config: {e}");
                Config::default()
            }
            None => Config::default(),
        };

        let mut rng = SmallRng::seed_from_u64(js_sys::Math::random().to_bits());
        let fly = Fly::spawn(Viewport::new(width, height), config.fly, &mut rng);
        let mut engine = Engine::open(PageStorage::open(), config);
        engine.set_viewport(width, height);
        info!("phantom notes ready with {} notes", engine.notes().len());

        Self { engine, fly, rng }
    }

    /// All notes as a JSON array, in render order.
    #[wasm_bindgen(js_name = notesJson)]
    pub fn notes_json(&self) -> String {
        to_json(self.engine.notes())
    }

    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.engine.set_viewport(width, height);
    }

    // --- Notes ---

    #[wasm_bindgen(js_name = createNote)]
    pub fn create_note(&mut self, timestamp: String) -> String {
        emit(&self.engine.create_note(timestamp))
    }

    #[wasm_bindgen(js_name = deleteNote)]
    pub fn delete_note(&mut self, id: u32) -> String {
        emit(&self.engine.delete_note(NoteId::from(id)))
    }

    #[wasm_bindgen(js_name = updateTitle)]
    pub fn update_title(&mut self, id: u32, title: String, timestamp: String) -> String {
        emit(&self.engine.update_title(NoteId::from(id), title, timestamp))
    }

    #[wasm_bindgen(js_name = updateContent)]
    pub fn update_content(&mut self, id: u32, content: String, timestamp: String) -> String {
        emit(&self.engine.update_content(NoteId::from(id), content, timestamp))
    }

    // --- Pointer ---

    /// Pointer pressed on an element inside note `id` whose `class` attribute
    /// is `class_name`. `width`/`height` are the note's rendered size.
    #[wasm_bindgen(js_name = pointerDown)]
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        id: u32,
        class_name: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        now_ms: f64,
    ) -> String {
        let Some(hit) = hit::hit_test(NoteId::from(id), class_name) else {
            return emit(&[]);
        };
        emit(&self.engine.on_pointer_down(hit, Point::new(x, y), Size::new(width, height), now_ms))
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> String {
        emit(&self.engine.on_pointer_move(Point::new(x, y), now_ms))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, now_ms: f64) -> String {
        emit(&self.engine.on_pointer_up(now_ms))
    }

    /// Advance timers. The script calls this at [`PhantomNotes::next_deadline`].
    pub fn tick(&mut self, now_ms: f64) -> String {
        emit(&self.engine.tick(now_ms))
    }

    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.engine.next_deadline()
    }

    /// CSS state class for a note: `dragging`, `resizing`, `positioning` or empty.
    #[wasm_bindgen(js_name = noteState)]
    pub fn note_state(&self, id: u32, now_ms: f64) -> String {
        match self.engine.note_state(NoteId::from(id), now_ms) {
            NoteState::Idle => String::new(),
            NoteState::Dragging => "dragging".to_owned(),
            NoteState::Resizing => "resizing".to_owned(),
            NoteState::Positioning => "positioning".to_owned(),
        }
    }

    // --- Keyboard ---

    /// Key pressed. `content_note` is the note whose content editor has focus.
    #[wasm_bindgen(js_name = keyDown)]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn key_down(
        &mut self,
        key: String,
        ctrl: bool,
        meta: bool,
        shift: bool,
        alt: bool,
        content_note: Option<u32>,
        timestamp: String,
    ) -> String {
        let modifiers = Modifiers { shift, ctrl, alt, meta };
        let target = content_note.map_or(KeyTarget::Page, |id| KeyTarget::Content(NoteId::from(id)));
        emit(&self.engine.on_key_down(&Key(key), modifiers, target, timestamp))
    }

    // --- Toolbar ---

    /// Toolbar buttons grouped for rendering, as JSON.
    #[wasm_bindgen(js_name = toolbarLayout)]
    pub fn toolbar_layout(&self) -> String {
        let groups: Vec<Vec<ToolbarButton>> = TOOLBAR_LAYOUT
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|&command| ToolbarButton { command, label: command.label(), title: command.title() })
                    .collect()
            })
            .collect();
        to_json(&groups)
    }

    /// A toolbar button was clicked. `command` is its `execCommand` name.
    #[wasm_bindgen(js_name = formatClicked)]
    pub fn format_clicked(&mut self, command: &str) -> String {
        let Some(command) = FormatCommand::from_exec_name(command) else {
            warn!("unknown format command {command:?}");
            return emit(&[]);
        };
        emit(&self.engine.on_format_clicked(command))
    }

    #[wasm_bindgen(js_name = contentEnter)]
    pub fn content_enter(&mut self, id: u32) -> String {
        emit(&self.engine.on_content_enter(NoteId::from(id)))
    }

    #[wasm_bindgen(js_name = contentLeave)]
    pub fn content_leave(&mut self, into_toolbar: bool, now_ms: f64) -> String {
        emit(&self.engine.on_content_leave(into_toolbar, now_ms))
    }

    #[wasm_bindgen(js_name = contentFocus)]
    pub fn content_focus(&mut self, id: u32) -> String {
        emit(&self.engine.on_content_focus(NoteId::from(id)))
    }

    #[wasm_bindgen(js_name = contentBlur)]
    pub fn content_blur(&mut self, id: u32) {
        self.engine.on_content_blur(NoteId::from(id));
    }

    #[wasm_bindgen(js_name = contentPointerDown)]
    pub fn content_pointer_down(&mut self, id: u32) {
        self.engine.on_content_pointer_down(NoteId::from(id));
    }

    #[wasm_bindgen(js_name = toolbarEnter)]
    pub fn toolbar_enter(&mut self) -> String {
        emit(&self.engine.on_toolbar_enter())
    }

    #[wasm_bindgen(js_name = toolbarLeave)]
    pub fn toolbar_leave(&mut self, now_ms: f64) -> String {
        emit(&self.engine.on_toolbar_leave(now_ms))
    }

    // --- Effects ---

    /// Current fly position and heading as JSON.
    #[wasm_bindgen(js_name = flyState)]
    pub fn fly_state(&self) -> String {
        #[derive(Serialize)]
        struct FlyState {
            position: Point,
            heading_deg: f64,
            flying: bool,
        }
        to_json(&FlyState {
            position: self.fly.position(),
            heading_deg: self.fly.heading_deg(),
            flying: self.fly.is_flying(),
        })
    }

    /// Cursor moved. Returns the new flight as JSON if the fly took off.
    #[wasm_bindgen(js_name = flyCursorMove)]
    pub fn fly_cursor_move(&mut self, x: f64, y: f64, now_ms: f64) -> Option<String> {
        let viewport = self.engine.viewport();
        self.fly.on_cursor_move(Point::new(x, y), viewport, now_ms, &mut self.rng).map(|flight| to_json(&flight))
    }

    /// Returns `true` when the fly has just landed.
    #[wasm_bindgen(js_name = flyTick)]
    pub fn fly_tick(&mut self, now_ms: f64) -> bool {
        self.fly.tick(now_ms)
    }

    /// Particle burst around a click as JSON.
    #[wasm_bindgen(js_name = particleBurst)]
    pub fn particle_burst(&mut self, x: f64, y: f64) -> String {
        to_json(&particles::burst(Point::new(x, y), &mut self.rng))
    }
}
