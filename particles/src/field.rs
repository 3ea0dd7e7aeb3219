//! Pure particle simulation: spawning, per-frame advancement, edge wrapping.
//!
//! The random source is injected as a closure returning uniform values in
//! `[0, 1)` so the field can be tested without WASM/browser dependencies.
//! Drawing lives in [`crate::render`].

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::consts::{AREA_PER_PARTICLE, OPACITY_MIN, OPACITY_SPAN, SIZE_MIN, SIZE_SPAN, SPEED_HALF_RANGE};

/// A single background particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub opacity: f64,
}

impl Particle {
    /// Sample a particle uniformly within a `width` × `height` viewport.
    pub fn spawn(rng: &mut impl FnMut() -> f64, width: f64, height: f64) -> Self {
        Self {
            x: rng() * width,
            y: rng() * height,
            size: rng() * SIZE_SPAN + SIZE_MIN,
            speed_x: rng() * (SPEED_HALF_RANGE * 2.0) - SPEED_HALF_RANGE,
            speed_y: rng() * (SPEED_HALF_RANGE * 2.0) - SPEED_HALF_RANGE,
            opacity: rng() * OPACITY_SPAN + OPACITY_MIN,
        }
    }

    /// Advance one frame, wrapping at viewport edges: a particle leaving one
    /// side re-enters from the opposite side.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x > width {
            self.x = 0.0;
        }
        if self.x < 0.0 {
            self.x = width;
        }
        if self.y > height {
            self.y = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        }
    }
}

/// Fixed-size particle set scaled to the viewport area.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

/// Particle count for a viewport: one per [`AREA_PER_PARTICLE`] square
/// pixels, rounded up so small viewports still get at least one.
#[must_use]
pub fn particle_count(width: f64, height: f64) -> usize {
    let count = (width * height) / AREA_PER_PARTICLE;
    if count <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        count.ceil() as usize
    }
}

impl ParticleField {
    /// Seed a field for the given viewport.
    #[must_use]
    pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let particles = (0..particle_count(width, height))
            .map(|_| Particle::spawn(rng, width, height))
            .collect();
        Self { particles, width, height }
    }

    /// Discard the current set and re-seed for a new viewport size.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        *self = Self::new(width, height, rng);
    }

    /// Advance every particle one frame.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
