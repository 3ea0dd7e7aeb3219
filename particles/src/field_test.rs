#![allow(clippy::float_cmp)]

use super::*;

/// Deterministic source cycling through a fixed sequence.
fn cycle(values: Vec<f64>) -> impl FnMut() -> f64 {
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

// --- particle_count ---

#[test]
fn count_scales_with_area() {
    // 1920x1080 = 2_073_600 px² → 138.24 → 139 particles.
    assert_eq!(particle_count(1920.0, 1080.0), 139);
}

#[test]
fn count_exact_multiple() {
    // 300x50 = 15_000 px² → exactly one particle.
    assert_eq!(particle_count(300.0, 50.0), 1);
}

#[test]
fn count_zero_viewport() {
    assert_eq!(particle_count(0.0, 768.0), 0);
}

#[test]
fn count_tiny_viewport_rounds_up() {
    assert_eq!(particle_count(10.0, 10.0), 1);
}

// --- Particle::spawn ---

#[test]
fn spawn_uses_sample_order() {
    // Samples are consumed as x, y, size, speed_x, speed_y, opacity.
    let mut rng = cycle(vec![0.5, 0.25, 0.0, 1.0, 0.5, 1.0]);
    let p = Particle::spawn(&mut rng, 800.0, 600.0);
    assert_eq!(p.x, 400.0);
    assert_eq!(p.y, 150.0);
    assert_eq!(p.size, 0.5);
    assert_eq!(p.speed_x, 0.25);
    assert_eq!(p.speed_y, 0.0);
    assert_eq!(p.opacity, 0.7);
}

#[test]
fn spawn_ranges_hold_at_extremes() {
    for sample in [0.0, 0.999_999] {
        let mut rng = cycle(vec![sample]);
        let p = Particle::spawn(&mut rng, 100.0, 100.0);
        assert!(p.size >= 0.5 && p.size < 2.5, "size {} out of range", p.size);
        assert!(p.speed_x >= -0.25 && p.speed_x < 0.25);
        assert!(p.speed_y >= -0.25 && p.speed_y < 0.25);
        assert!(p.opacity >= 0.2 && p.opacity < 0.7);
    }
}

// --- Particle::advance ---

fn still_particle(x: f64, y: f64, speed_x: f64, speed_y: f64) -> Particle {
    Particle { x, y, size: 1.0, speed_x, speed_y, opacity: 0.5 }
}

#[test]
fn advance_moves_by_velocity() {
    let mut p = still_particle(10.0, 20.0, 0.25, -0.25);
    p.advance(800.0, 600.0);
    assert_eq!(p.x, 10.25);
    assert_eq!(p.y, 19.75);
}

#[test]
fn advance_wraps_right_edge_to_left() {
    let mut p = still_particle(799.9, 300.0, 0.2, 0.0);
    p.advance(800.0, 600.0);
    assert_eq!(p.x, 0.0);
}

#[test]
fn advance_wraps_left_edge_to_right() {
    let mut p = still_particle(0.1, 300.0, -0.2, 0.0);
    p.advance(800.0, 600.0);
    assert_eq!(p.x, 800.0);
}

#[test]
fn advance_wraps_bottom_edge_to_top() {
    let mut p = still_particle(400.0, 599.9, 0.0, 0.2);
    p.advance(800.0, 600.0);
    assert_eq!(p.y, 0.0);
}

#[test]
fn advance_wraps_top_edge_to_bottom() {
    let mut p = still_particle(400.0, 0.1, 0.0, -0.2);
    p.advance(800.0, 600.0);
    assert_eq!(p.y, 600.0);
}

// --- ParticleField ---

#[test]
fn field_seeds_density_count() {
    let mut rng = cycle(vec![0.5]);
    let field = ParticleField::new(1920.0, 1080.0, &mut rng);
    assert_eq!(field.particles().len(), 139);
    assert_eq!(field.width(), 1920.0);
    assert_eq!(field.height(), 1080.0);
}

#[test]
fn field_tick_advances_every_particle() {
    let mut rng = cycle(vec![0.5, 0.5, 0.5, 1.0, 1.0, 0.5]);
    let mut field = ParticleField::new(300.0, 50.0, &mut rng);
    let before = field.particles()[0];
    field.tick();
    let after = field.particles()[0];
    assert_eq!(after.x, before.x + before.speed_x);
    assert_eq!(after.y, before.y + before.speed_y);
}

#[test]
fn field_resize_reseeds_for_new_viewport() {
    let mut rng = cycle(vec![0.5]);
    let mut field = ParticleField::new(300.0, 50.0, &mut rng);
    assert_eq!(field.particles().len(), 1);

    field.resize(1920.0, 1080.0, &mut rng);
    assert_eq!(field.particles().len(), 139);
    assert_eq!(field.width(), 1920.0);
}

#[test]
fn field_default_is_empty() {
    let field = ParticleField::default();
    assert!(field.particles().is_empty());
}
