//! Immutable site content loaded once at process start.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::sync::Arc;

use crate::net::types::{Case, Page};

/// Cases and pages in configured order. There is no mutation API; a new
/// `SiteContent` is built whenever content is (re)loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteContent {
    cases: Vec<Case>,
    pages: Vec<Page>,
}

/// Context handle for the content shared by every render on the server.
pub type SharedContent = Arc<SiteContent>;

impl SiteContent {
    #[must_use]
    pub fn new(cases: Vec<Case>, pages: Vec<Page>) -> Self {
        Self { cases, pages }
    }

    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn case(&self, slug: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.slug == slug)
    }

    #[must_use]
    pub fn page(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }
}
