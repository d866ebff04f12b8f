//! Per-request style sheet collector.
//!
//! DESIGN
//! ======
//! One `ServerStyleSheet` is created for each page render. Components register
//! the static rules they need; the sheet keeps each rule once, in the order it
//! was first registered, so the collected CSS is exactly the union of what the
//! rendered components asked for. Once sealed the sheet rejects further
//! registrations. [`collect_styles`] guarantees the seal happens when the
//! wrapped render finishes, fails, panics, or is dropped.

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A block of CSS owned by one component, identified by a stable id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleRule {
    pub id: &'static str,
    pub css: &'static str,
}

impl StyleRule {
    #[must_use]
    pub const fn new(id: &'static str, css: &'static str) -> Self {
        Self { id, css }
    }
}

/// Outcome of [`ServerStyleSheet::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// First registration of this rule; the caller should emit it.
    Inserted,
    /// Already collected during this render.
    Duplicate,
    /// The sheet was sealed; nothing was recorded.
    Sealed,
}

#[derive(Debug, Default)]
struct SheetInner {
    rules: Vec<StyleRule>,
    seen: HashSet<&'static str>,
    sealed: bool,
}

/// Shared handle; clones refer to the same sheet.
#[derive(Clone, Debug, Default)]
pub struct ServerStyleSheet {
    inner: Arc<Mutex<SheetInner>>,
}

impl ServerStyleSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SheetInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, rule: StyleRule) -> Registration {
        let mut inner = self.lock();
        if inner.sealed {
            return Registration::Sealed;
        }
        if !inner.seen.insert(rule.id) {
            return Registration::Duplicate;
        }
        inner.rules.push(rule);
        Registration::Inserted
    }

    /// Collected rules in first-registration order.
    #[must_use]
    pub fn rules(&self) -> Vec<StyleRule> {
        self.lock().rules.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().rules.is_empty()
    }

    /// Collected rules as `<style>` tags, one per rule id, ready for `<head>`.
    #[must_use]
    pub fn style_tags(&self) -> String {
        let inner = self.lock();
        let mut out = String::new();
        for rule in &inner.rules {
            out.push_str(r#"<style data-collected="true" id=""#);
            out.push_str(rule.id);
            out.push_str(r#"">"#);
            out.push_str(rule.css);
            out.push_str("</style>");
        }
        out
    }

    /// Stop accepting rules. Returns `true` only for the call that sealed.
    pub fn seal(&self) -> bool {
        let mut inner = self.lock();
        !std::mem::replace(&mut inner.sealed, true)
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.lock().sealed
    }
}

/// Seals its sheet when dropped.
#[derive(Debug)]
pub struct SealGuard {
    sheet: ServerStyleSheet,
}

impl SealGuard {
    #[must_use]
    pub fn new(sheet: ServerStyleSheet) -> Self {
        Self { sheet }
    }
}

impl Drop for SealGuard {
    fn drop(&mut self) {
        self.sheet.seal();
    }
}

/// Run `render` with `sheet` collecting, sealing the sheet on every exit path.
pub async fn collect_styles<F>(sheet: &ServerStyleSheet, render: F) -> F::Output
where
    F: Future,
{
    let _guard = SealGuard::new(sheet.clone());
    render.await
}
