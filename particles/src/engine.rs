//! Canvas-owning engine shell.
//!
//! The host component creates one [`ParticleEngine`] per canvas element and
//! drives it from a `requestAnimationFrame` loop. All simulation logic lives
//! in [`crate::field`] so it stays testable without a browser.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::field::ParticleField;
use crate::render;

pub struct ParticleEngine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
}

impl ParticleEngine {
    /// Attach to a canvas element and seed a field for the given viewport.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no usable 2D context.
    pub fn new(canvas: HtmlCanvasElement, width: f64, height: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut engine = Self { canvas, ctx, field: ParticleField::default() };
        engine.resize(width, height);
        Ok(engine)
    }

    /// Resize the backing store and re-seed the field for the new viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.field = ParticleField::new(width, height, &mut js_sys::Math::random);
    }

    /// Advance the field one frame and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn tick_and_draw(&mut self) -> Result<(), JsValue> {
        self.field.tick();
        render::draw(&self.ctx, &self.field)
    }
}
