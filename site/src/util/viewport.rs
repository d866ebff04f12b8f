//! Viewport capability checks.
//!
//! Behavior gated on the viewport width (title parallax, hover reveals) asks an
//! injected [`ViewportCapability`] instead of reading `window` directly, so
//! components can be rendered deterministically on the server and in tests.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::sync::Arc;

/// Narrowest viewport, in CSS pixels, that counts as desktop.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Answers whether the current surface supports desktop-only effects.
pub trait ViewportCapability: Send + Sync {
    fn is_desktop_capable(&self) -> bool;
}

/// Whether a viewport `width` in CSS pixels is desktop-sized.
#[must_use]
pub fn is_desktop_width(width: f64) -> bool {
    width >= DESKTOP_MIN_WIDTH
}

/// Reads `window.innerWidth` when asked; always `false` outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl ViewportCapability for BrowserViewport {
    fn is_desktop_capable(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|width| width.as_f64())
                .map_or(false, is_desktop_width)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

/// Fixed answer, for server renders and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedViewport(pub bool);

impl ViewportCapability for FixedViewport {
    fn is_desktop_capable(&self) -> bool {
        self.0
    }
}

/// Context handle carrying the active capability.
#[derive(Clone)]
pub struct Viewport(Arc<dyn ViewportCapability>);

impl Viewport {
    pub fn new(capability: impl ViewportCapability + 'static) -> Self {
        Self(Arc::new(capability))
    }

    #[must_use]
    pub fn is_desktop_capable(&self) -> bool {
        self.0.is_desktop_capable()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(BrowserViewport)
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Viewport").field(&self.is_desktop_capable()).finish()
    }
}
