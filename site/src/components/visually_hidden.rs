//! Text exposed to assistive technology but not drawn.

use leptos::prelude::*;

use crate::styles::{StyleRule, use_styles};

pub const VISUALLY_HIDDEN_STYLES: StyleRule = StyleRule::new(
    "visually-hidden",
    ".visually-hidden{position:absolute!important;width:1px;height:1px;padding:0;margin:-1px;\
overflow:hidden;clip:rect(0,0,0,0);white-space:nowrap;border:0;}",
);

#[component]
pub fn VisuallyHidden(children: Children) -> impl IntoView {
    use_styles(VISUALLY_HIDDEN_STYLES);
    view! {
        <span class="visually-hidden">{children()}</span>
    }
}
