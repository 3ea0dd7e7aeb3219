//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers isolated from browser concerns so page and component logic
//! stays testable on the host.

pub mod relay_urls;
pub mod validate;
