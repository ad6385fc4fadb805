//! Layout, interaction and storage engine for the phantom notes page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! everything about the notes board except raw DOM construction: translating
//! pointer and keyboard events into note mutations, clamping and snapping
//! dragged notes, persisting the collection to local storage, and the maths
//! behind the decorative fly and particle effects. The host JavaScript layer
//! wires DOM events to the engine and applies the resulting
//! [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] tying the pieces together |
//! | [`doc`] | Note model and the ordered in-memory [`doc::NoteStore`] |
//! | [`layout`] | Drag clamping, release snapping, resize bounds |
//! | [`input`] | Gesture state machine and its pure transition function |
//! | [`hit`] | Classifying what a pointer-down landed on |
//! | [`persistence`] | Key-value storage trait and note (de)serialization |
//! | [`format`] | Rich-text command catalogue, shortcuts, toolbar visibility |
//! | [`fly`] | Cursor-avoiding fly animation |
//! | [`particles`] | Particle burst geometry |
//! | [`geom`] | Points, sizes and viewports |
//! | [`config`] | Typed tunables with defaults |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |
//! | `web` | wasm-bindgen facade (feature `browser`) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod fly;
pub mod format;
pub mod geom;
pub mod hit;
pub mod input;
pub mod layout;
pub mod particles;
pub mod persistence;

#[cfg(feature = "browser")]
pub mod web;
