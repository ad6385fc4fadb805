#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn burst_has_five_particles_from_origin() {
    let origin = Point::new(300.0, 200.0);
    let particles = burst(origin, &mut StdRng::seed_from_u64(1));
    assert_eq!(particles.len(), 5);
    assert!(particles.iter().all(|p| p.from == origin));
}

#[test]
fn burst_reach_and_duration_within_jitter() {
    let origin = Point::new(0.0, 0.0);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        for p in burst(origin, &mut rng) {
            let d = p.from.distance_to(p.to);
            assert!((50.0 - EPSILON..100.0).contains(&d), "distance {d}");
            assert!((1000.0..1500.0).contains(&p.duration_ms), "duration {}", p.duration_ms);
        }
    }
}

#[test]
fn first_particle_heads_right() {
    let origin = Point::new(10.0, 10.0);
    let first = burst(origin, &mut StdRng::seed_from_u64(3))[0];
    assert!((first.to.y - origin.y).abs() < EPSILON);
    assert!(first.to.x > origin.x);
}

#[test]
fn particles_are_evenly_spread() {
    let origin = Point::new(0.0, 0.0);
    let particles = burst(origin, &mut StdRng::seed_from_u64(5));
    for (i, p) in particles.iter().enumerate() {
        let expected = std::f64::consts::TAU * i as f64 / 5.0;
        let actual = p.to.y.atan2(p.to.x).rem_euclid(std::f64::consts::TAU);
        assert!((actual - expected).abs() < 1e-6, "particle {i}: {actual} vs {expected}");
    }
}
