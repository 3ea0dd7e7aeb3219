//! Shared numeric constants for the particles crate.

// ── Density ─────────────────────────────────────────────────────

/// Viewport area, in square CSS pixels, covered by one particle.
pub const AREA_PER_PARTICLE: f64 = 15_000.0;

// ── Per-particle ranges ─────────────────────────────────────────

/// Minimum particle radius in pixels.
pub const SIZE_MIN: f64 = 0.5;

/// Radius spread above [`SIZE_MIN`].
pub const SIZE_SPAN: f64 = 2.0;

/// Per-axis speed is sampled uniformly from ±`SPEED_HALF_RANGE` px/frame.
pub const SPEED_HALF_RANGE: f64 = 0.25;

/// Minimum particle opacity.
pub const OPACITY_MIN: f64 = 0.2;

/// Opacity spread above [`OPACITY_MIN`].
pub const OPACITY_SPAN: f64 = 0.5;
