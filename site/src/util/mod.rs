//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the decisions they make can be tested without a live display.

pub mod dark_mode;
pub mod image;
pub mod lazy_load;
pub mod links;
pub mod markdown;
pub mod parallax;
pub mod viewport;
