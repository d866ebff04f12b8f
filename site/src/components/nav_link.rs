//! Header navigation link that marks the current page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::styles::{StyleRule, use_styles};

pub const NAV_LINK_STYLES: StyleRule = StyleRule::new(
    "nav-link",
    ".nav-link{display:inline-block;padding:.5rem .75rem;font-weight:600;color:var(--text-color);}\
.nav-link:hover,.nav-link--active{color:var(--primary-color);}",
);

#[component]
pub fn NavLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let location = use_location();
    let target = href.clone();
    let is_active = Memo::new(move |_| location.pathname.get() == target);

    use_styles(NAV_LINK_STYLES);
    view! {
        <a
            class=move || if is_active.get() { "nav-link nav-link--active" } else { "nav-link" }
            aria-current=move || is_active.get().then_some("page")
            href=href
        >
            {children()}
        </a>
    }
}
