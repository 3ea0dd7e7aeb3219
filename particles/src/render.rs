//! Rendering: draws the particle field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the field and produces pixels — it does not
//! mutate any simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::ParticleEngine::tick_and_draw`])
//! handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::field::ParticleField;

/// Particle tint: indigo, matching the page accent color.
const PARTICLE_RGB: (u8, u8, u8) = (99, 102, 241);

/// Clear the viewport and draw every particle as a filled circle.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    for particle in field.particles() {
        ctx.set_fill_style_str(&fill_style(particle.opacity));
        ctx.begin_path();
        ctx.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0)?;
        ctx.fill();
    }

    Ok(())
}

fn fill_style(opacity: f64) -> String {
    let (r, g, b) = PARTICLE_RGB;
    format!("rgba({r}, {g}, {b}, {opacity})")
}
