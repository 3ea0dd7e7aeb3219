//! Decorative particle-field renderer for the figure studio background.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the background canvas: seeding a particle field sized to
//! the viewport, advancing it once per animation frame, and drawing it. The
//! host layer is responsible only for driving `requestAnimationFrame` and
//! forwarding window resizes to the engine.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-owning shell driven by the host's frame loop |
//! | [`field`] | Pure particle simulation (positions, velocities, wrapping) |
//! | [`render`] | Drawing the field to a 2D context |
//! | [`consts`] | Shared numeric constants (density, speed and size ranges) |

pub mod consts;
pub mod engine;
pub mod field;
pub mod render;
