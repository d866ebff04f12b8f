//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: data flows one way from props into markup.
//! Each registers its own static style rule through `crate::styles::use_styles`.

pub mod case_image;
pub mod case_preview;
pub mod header;
pub mod logo;
pub mod nav_link;
pub mod tag;
pub mod theme_toggle;
pub mod visually_hidden;
