//! Upstream service clients used by the generation pipeline.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the outbound HTTP calls and the third-party
//! response-shape handling so route handlers can stay focused on protocol
//! translation. Both upstreams are best-effort and unauthenticated; their
//! response shapes are treated as unreliable.

pub mod figure;
pub mod hosting;
