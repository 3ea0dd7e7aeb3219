//! Full-viewport canvas hosting the decorative particle animation.
//!
//! ARCHITECTURE
//! ============
//! The `particles` crate owns simulation and drawing; this host owns the DOM
//! wiring: it seeds the engine once the canvas mounts, re-seeds it on window
//! resize, and drives frames from `requestAnimationFrame`. Purely cosmetic —
//! no interaction with the upload flow.

use leptos::prelude::*;

#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move |_| {
            if let Some(canvas) = canvas_ref.get() {
                start_animation(canvas);
            }
        });
    }

    view! { <canvas class="particles" node_ref=canvas_ref></canvas> }
}

#[cfg(feature = "csr")]
fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Wire the engine to the window: resize listener plus a self-rescheduling
/// animation-frame loop. The closures keep the engine alive for the page's
/// lifetime; there is no teardown path short of navigation.
#[cfg(feature = "csr")]
fn start_animation(canvas: web_sys::HtmlCanvasElement) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use particles::engine::ParticleEngine;

    let Some(window) = web_sys::window() else {
        return;
    };
    let (width, height) = viewport_size(&window);
    let engine = match ParticleEngine::new(canvas, width, height) {
        Ok(engine) => Rc::new(RefCell::new(engine)),
        Err(err) => {
            log::warn!("particle canvas unavailable: {err:?}");
            return;
        }
    };

    // Re-seed the field whenever the viewport changes.
    {
        let engine = Rc::clone(&engine);
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                let (width, height) = viewport_size(&window);
                engine.borrow_mut().resize(width, height);
            }
        });
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_ok()
        {
            on_resize.forget();
        }
    }

    // Frame loop: each callback re-requests itself through the holder.
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let engine_for_cb = Rc::clone(&engine);
    let tick = Closure::wrap(Box::new(move |_ts: f64| {
        if let Err(err) = engine_for_cb.borrow_mut().tick_and_draw() {
            log::warn!("particle frame failed: {err:?}");
            holder_for_cb.borrow_mut().take();
            return;
        }
        if let Some(window) = web_sys::window() {
            let reschedule = holder_for_cb
                .borrow()
                .as_ref()
                .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
            if !matches!(reschedule, Some(Ok(_))) {
                holder_for_cb.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut(f64)>);

    let first = window.request_animation_frame(tick.as_ref().unchecked_ref());
    if first.is_ok() {
        *holder.borrow_mut() = Some(tick);
    }
}
