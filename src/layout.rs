//! Layout engine: where a note may go while dragged and where it rests after.
//!
//! Two operations matter. [`clamp_during_drag`] runs on every pointer move and
//! must stay O(1). [`snap_on_release`] runs once per release and aligns the
//! note with the rows and columns of its neighbours.
//!
//! Snapping is two independent linear scans, one per axis. Within an axis the
//! **last** note in iteration order that is within the threshold wins; this is
//! not a nearest-neighbour search and must not become one.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::config::LayoutConfig;
use crate::geom::{Point, Size, Viewport};

/// Outcome of a snap pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// Final resting position.
    pub position: Point,
    /// The y the note snapped to, if a row match was found.
    pub row: Option<f64>,
    /// The x the note snapped to, if a column match was found.
    pub column: Option<f64>,
}

impl Snap {
    /// Whether either axis snapped.
    #[must_use]
    pub fn snapped(&self) -> bool {
        self.row.is_some() || self.column.is_some()
    }
}

/// Bound a raw drag position to the usable area of the viewport.
///
/// x lands in `[-left_overhang, width - right_margin]`, y in
/// `[0, height + bottom_overscroll]`. When the viewport is too narrow for the
/// x range to be non-empty the lower bound wins.
#[must_use]
pub fn clamp_during_drag(raw: Point, viewport: Viewport, config: &LayoutConfig) -> Point {
    let max_x = viewport.width - config.right_margin;
    let max_y = viewport.height + config.bottom_overscroll;
    Point {
        x: raw.x.min(max_x).max(-config.left_overhang),
        y: raw.y.min(max_y).max(0.0),
    }
}

/// Align a released note with the rows and columns of `others`.
///
/// `others` must already exclude the released note and any note still in its
/// positioning cooldown. Distances equal to a threshold do not snap.
pub fn snap_on_release<I>(candidate: Point, others: I, config: &LayoutConfig) -> Snap
where
    I: IntoIterator<Item = Point>,
    I::IntoIter: Clone,
{
    let others = others.into_iter();

    let mut row = None;
    for other in others.clone() {
        if (candidate.y - other.y).abs() < config.row_snap_distance {
            row = Some(other.y);
        }
    }

    let mut column = None;
    for other in others {
        if (candidate.x - other.x).abs() < config.column_snap_distance {
            column = Some(other.x);
        }
    }

    Snap {
        position: Point { x: column.unwrap_or(candidate.x), y: row.unwrap_or(candidate.y) },
        row,
        column,
    }
}

/// Size of a note being resized from its bottom-right corner.
#[must_use]
pub fn resize(start_size: Size, start_pointer: Point, pointer: Point, config: &LayoutConfig) -> Size {
    let delta = pointer.offset_from(start_pointer);
    Size {
        width: (start_size.width + delta.x).max(config.min_note_width),
        height: (start_size.height + delta.y).max(config.min_note_height),
    }
}

/// Where a freshly created note is placed: near the top-right corner.
#[must_use]
pub fn new_note_origin(viewport: Viewport, config: &LayoutConfig) -> Point {
    Point { x: viewport.width - config.new_note_right_inset, y: config.new_note_top }
}
