//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! handed to every Leptos render through context. Everything in it is
//! immutable after startup.

use std::sync::Arc;

use site::state::content::{SharedContent, SiteContent};

use crate::config::SiteConfig;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub content: SharedContent,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(content: SiteContent, config: SiteConfig) -> Self {
        Self { content: Arc::new(content), config: Arc::new(config) }
    }
}
