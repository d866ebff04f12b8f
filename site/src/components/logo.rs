//! Site wordmark.

use leptos::prelude::*;

#[component]
pub fn Logo(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 120 40" role="img" aria-hidden="true" focusable="false">
            <text x="0" y="31" font-family="Ubuntu Mono, monospace" font-size="36" font-weight="700">
                "itiden"
            </text>
        </svg>
    }
}
