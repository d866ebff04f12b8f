//! Component styles and their collection during server rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns a static [`StyleRule`] and calls [`use_styles`] while it
//! renders. Nothing is rendered in place, so server and hydrated markup match.
//! On the server the rule is recorded in the request's [`ServerStyleSheet`]
//! (provided through context); the page middleware splices the collected
//! `<style>` tags into `<head>` once the render completes, including rules
//! registered under `<Suspense>`. In the browser there is no sheet: rules
//! missing from the document are appended to `<head>`, keyed by rule id, which
//! covers pages first reached through client-side navigation.


pub mod global;
pub mod sheet;
pub mod theme;

use leptos::prelude::*;

pub use sheet::{Registration, ServerStyleSheet, StyleRule, collect_styles};

/// Register `rule` for the current render.
pub fn use_styles(rule: StyleRule) {
    let Some(sheet) = use_context::<ServerStyleSheet>() else {
        #[cfg(feature = "hydrate")]
        Effect::new(move || mount_rule(rule));
        return;
    };
    if sheet.register(rule) == Registration::Sealed {
        log::warn!("style rule {} registered after the sheet was sealed", rule.id);
    }
}

/// Append `rule` to `<head>` unless an element with its id already exists.
#[cfg(feature = "hydrate")]
fn mount_rule(rule: StyleRule) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(rule.id).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_id(rule.id);
            style.set_text_content(Some(rule.css));
            if head.append_child(&style).is_err() {
                log::warn!("could not mount style rule {}", rule.id);
            }
        }
        Err(_) => log::warn!("could not create style element for {}", rule.id),
    }
}
