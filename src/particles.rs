//! Ethereal particle bursts.
//!
//! A burst is a ring of glowing dots that fly outward from a point and shrink
//! away. This module only computes where each particle goes and for how long;
//! the host animates them.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

use std::f64::consts::TAU;

use rand::Rng;
use serde::Serialize;

use crate::consts::*;
use crate::geom::Point;

/// One particle of a burst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub from: Point,
    pub to: Point,
    pub duration_ms: f64,
}

/// Evenly spaced particles radiating from `origin` with jittered reach and duration.
#[allow(clippy::cast_precision_loss)]
pub fn burst<R: Rng>(origin: Point, rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let angle = TAU * i as f64 / PARTICLE_COUNT as f64;
            let distance = PARTICLE_MIN_DISTANCE_PX + rng.random::<f64>() * PARTICLE_DISTANCE_JITTER_PX;
            let to = Point { x: origin.x + angle.cos() * distance, y: origin.y + angle.sin() * distance };
            let duration_ms = PARTICLE_MIN_DURATION_MS + rng.random::<f64>() * PARTICLE_DURATION_JITTER_MS;
            Particle { from: origin, to, duration_ms }
        })
        .collect()
}
