//! Engine configuration parsed from an optional JSON document.
//!
//! The host page may pass a JSON object to the browser facade; any field left
//! out keeps its default from [`crate::consts`]. An absent or invalid document
//! yields [`Config::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Drag, snap, resize and placement tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub left_overhang: f64,
    pub right_margin: f64,
    pub bottom_overscroll: f64,
    pub row_snap_distance: f64,
    pub column_snap_distance: f64,
    pub drag_arm_delay_ms: f64,
    pub positioning_cooldown_ms: f64,
    pub min_note_width: f64,
    pub min_note_height: f64,
    pub new_note_right_inset: f64,
    pub new_note_top: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_overhang: LEFT_OVERHANG_PX,
            right_margin: RIGHT_MARGIN_PX,
            bottom_overscroll: BOTTOM_OVERSCROLL_PX,
            row_snap_distance: ROW_SNAP_DISTANCE_PX,
            column_snap_distance: COLUMN_SNAP_DISTANCE_PX,
            drag_arm_delay_ms: DRAG_ARM_DELAY_MS,
            positioning_cooldown_ms: POSITIONING_COOLDOWN_MS,
            min_note_width: MIN_NOTE_WIDTH_PX,
            min_note_height: MIN_NOTE_HEIGHT_PX,
            new_note_right_inset: NEW_NOTE_RIGHT_INSET_PX,
            new_note_top: NEW_NOTE_TOP_PX,
        }
    }
}

/// Fly animation tunables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyConfig {
    pub flee_distance: f64,
    pub edge_margin: f64,
    pub flight_ms: f64,
}

impl Default for FlyConfig {
    fn default() -> Self {
        Self { flee_distance: FLY_FLEE_DISTANCE_PX, edge_margin: FLY_EDGE_MARGIN_PX, flight_ms: FLY_FLIGHT_MS }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub fly: FlyConfig,
    /// Local storage key for the note collection.
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { layout: LayoutConfig::default(), fly: FlyConfig::default(), storage_key: STORAGE_KEY.to_string() }
    }
}

impl Config {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every tunable is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let l = &self.layout;
        non_negative("layout.left_overhang", l.left_overhang)?;
        non_negative("layout.right_margin", l.right_margin)?;
        non_negative("layout.bottom_overscroll", l.bottom_overscroll)?;
        non_negative("layout.row_snap_distance", l.row_snap_distance)?;
        non_negative("layout.column_snap_distance", l.column_snap_distance)?;
        non_negative("layout.drag_arm_delay_ms", l.drag_arm_delay_ms)?;
        non_negative("layout.positioning_cooldown_ms", l.positioning_cooldown_ms)?;
        positive("layout.min_note_width", l.min_note_width)?;
        positive("layout.min_note_height", l.min_note_height)?;
        non_negative("layout.new_note_right_inset", l.new_note_right_inset)?;
        non_negative("layout.new_note_top", l.new_note_top)?;

        let f = &self.fly;
        non_negative("fly.flee_distance", f.flee_distance)?;
        non_negative("fly.edge_margin", f.edge_margin)?;
        non_negative("fly.flight_ms", f.flight_ms)?;

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "storage_key", reason: "must not be empty".into() });
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid { field, reason: format!("expected a finite value >= 0, got {value}") });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Invalid { field, reason: format!("expected a finite value > 0, got {value}") });
    }
    Ok(())
}
