//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! State lives in explicit structs held by Leptos signals rather than
//! module-level globals, so transitions stay pure and host-testable.

pub mod upload;
