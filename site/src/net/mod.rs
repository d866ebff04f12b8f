//! Content types and REST helpers shared by the browser and server builds.

pub mod api;
pub mod types;
