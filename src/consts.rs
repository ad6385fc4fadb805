//! Shared numeric constants for the notes engine.
//!
//! The layout, fly and storage-key values are the defaults behind
//! [`crate::config::Config`]. The toolbar timings and particle values are
//! fixed and read directly by `format` and `particles`.

// ── Drag bounds ─────────────────────────────────────────────────

/// How far (px) a note may hang off the left edge of the viewport.
pub const LEFT_OVERHANG_PX: f64 = 50.0;

/// Minimum distance (px) kept between a note's origin and the right edge.
pub const RIGHT_MARGIN_PX: f64 = 50.0;

/// How far (px) below the fold a note may be dragged.
pub const BOTTOM_OVERSCROLL_PX: f64 = 500.0;

// ── Snapping ────────────────────────────────────────────────────

/// Vertical distance (px) under which a released note joins another note's row.
pub const ROW_SNAP_DISTANCE_PX: f64 = 40.0;

/// Horizontal distance (px) under which a released note joins another note's column.
pub const COLUMN_SNAP_DISTANCE_PX: f64 = 30.0;

// ── Timing ──────────────────────────────────────────────────────

/// Hold time before a press on the note body becomes a drag.
pub const DRAG_ARM_DELAY_MS: f64 = 100.0;

/// Cooldown after release during which a note is not a snap target.
pub const POSITIONING_COOLDOWN_MS: f64 = 200.0;

/// Delay before a toolbar hide request is evaluated.
pub const TOOLBAR_HIDE_DELAY_MS: f64 = 100.0;

/// Duration of the toolbar fade-out transition.
pub const TOOLBAR_FADE_MS: f64 = 300.0;

// ── Sizing ──────────────────────────────────────────────────────

/// Smallest width (px) a note can be resized to.
pub const MIN_NOTE_WIDTH_PX: f64 = 200.0;

/// Smallest height (px) a note can be resized to.
pub const MIN_NOTE_HEIGHT_PX: f64 = 150.0;

/// New notes are placed this far (px) left of the right viewport edge.
pub const NEW_NOTE_RIGHT_INSET_PX: f64 = 300.0;

/// New notes are placed at this y (px), just below the header.
pub const NEW_NOTE_TOP_PX: f64 = 200.0;

// ── Fly ─────────────────────────────────────────────────────────

/// Cursor distance (px) at which the fly takes off.
pub const FLY_FLEE_DISTANCE_PX: f64 = 32.0;

/// The fly stays this far (px) from the right and bottom viewport edges.
pub const FLY_EDGE_MARGIN_PX: f64 = 50.0;

/// How long a flight lasts; matches the CSS transition.
pub const FLY_FLIGHT_MS: f64 = 1500.0;

// ── Particles ───────────────────────────────────────────────────

/// Particles per burst.
pub const PARTICLE_COUNT: usize = 5;

/// Minimum particle travel distance (px).
pub const PARTICLE_MIN_DISTANCE_PX: f64 = 50.0;

/// Random extra travel distance (px) on top of the minimum.
pub const PARTICLE_DISTANCE_JITTER_PX: f64 = 50.0;

/// Minimum particle animation duration.
pub const PARTICLE_MIN_DURATION_MS: f64 = 1000.0;

/// Random extra duration on top of the minimum.
pub const PARTICLE_DURATION_JITTER_MS: f64 = 500.0;

// ── Storage ─────────────────────────────────────────────────────

/// Local storage key holding the serialized note collection.
pub const STORAGE_KEY: &str = "phantomNotes";
