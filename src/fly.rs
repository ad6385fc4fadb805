//! The decorative fly that darts away from the cursor.
//!
//! The fly sits still until the cursor comes within the flee distance, then
//! picks a random spot in the viewport, turns to face it and flies there. A
//! flight is never interrupted; cursor moves during a flight are ignored.
//! Randomness is injected so flights are reproducible under test.

#[cfg(test)]
#[path = "fly_test.rs"]
mod fly_test;

use rand::Rng;
use serde::Serialize;

use crate::config::FlyConfig;
use crate::geom::{Point, Viewport};

/// A flight the host should animate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Flight {
    /// Destination, top-left of the fly element.
    pub to: Point,
    /// Rotation in degrees; 0 points the emoji up.
    pub heading_deg: f64,
    /// Host time at which the flight ends.
    pub lands_at: f64,
}

/// Fly position and flight status.
#[derive(Debug, Clone)]
pub struct Fly {
    position: Point,
    heading_deg: f64,
    flight: Option<Flight>,
    config: FlyConfig,
}

impl Fly {
    /// Place the fly at a random spot inside `viewport`.
    pub fn spawn<R: Rng>(viewport: Viewport, config: FlyConfig, rng: &mut R) -> Self {
        Self { position: random_spot(viewport, &config, rng), heading_deg: 0.0, flight: None, config }
    }

    /// Place the fly at a known spot.
    #[must_use]
    pub fn at(position: Point, config: FlyConfig) -> Self {
        Self { position, heading_deg: 0.0, flight: None, config }
    }

    /// Current position (the destination while in flight).
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current rotation in degrees.
    #[must_use]
    pub fn heading_deg(&self) -> f64 {
        self.heading_deg
    }

    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    /// React to the cursor. Returns a new flight if the fly took off.
    pub fn on_cursor_move<R: Rng>(
        &mut self,
        cursor: Point,
        viewport: Viewport,
        now_ms: f64,
        rng: &mut R,
    ) -> Option<Flight> {
        if self.flight.is_some() || self.position.distance_to(cursor) >= self.config.flee_distance {
            return None;
        }

        let to = random_spot(viewport, &self.config, rng);
        let delta = to.offset_from(self.position);
        let heading_deg = delta.y.atan2(delta.x).to_degrees() + 90.0;
        let flight = Flight { to, heading_deg, lands_at: now_ms + self.config.flight_ms };

        self.position = to;
        self.heading_deg = heading_deg;
        self.flight = Some(flight);
        Some(flight)
    }

    /// Land the fly once its flight time is over. Returns `true` on landing.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.flight {
            Some(flight) if now_ms >= flight.lands_at => {
                self.flight = None;
                true
            }
            _ => false,
        }
    }
}

fn random_spot<R: Rng>(viewport: Viewport, config: &FlyConfig, rng: &mut R) -> Point {
    let max_x = (viewport.width - config.edge_margin).max(0.0);
    let max_y = (viewport.height - config.edge_margin).max(0.0);
    Point { x: rng.random::<f64>() * max_x, y: rng.random::<f64>() * max_y }
}
