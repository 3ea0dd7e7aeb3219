//! Reusable UI component modules.

pub mod particle_canvas;
