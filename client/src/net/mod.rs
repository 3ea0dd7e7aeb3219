//! Network layer: REST calls to the generation endpoint.

pub mod api;
