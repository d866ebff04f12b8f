//! Not-found view for unknown routes and slugs.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::styles::{StyleRule, use_styles};

pub const NOT_FOUND_STYLES: StyleRule = StyleRule::new(
    "not-found",
    ".not-found{max-width:800px;margin:0 auto;padding:4rem 1rem;text-align:center;color:var(--text-color);}",
);

/// Message body shared by every not-found case.
#[component]
pub fn NotFound() -> impl IntoView {
    use_styles(NOT_FOUND_STYLES);
    view! {
        <section class="not-found">
            <h1>"Sidan kunde inte hittas"</h1>
            <p><a href="/">"Till startsidan"</a></p>
        </section>
    }
}

/// Router fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Header/>
        <NotFound/>
    }
}
