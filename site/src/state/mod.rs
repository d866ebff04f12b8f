//! Shared data handed to components through Leptos context.
//!
//! DESIGN
//! ======
//! Content and the menu table are immutable once constructed; only `ui`
//! carries mutable presentation state, and it is owned by the root `App`.

pub mod content;
pub mod menu;
pub mod ui;
