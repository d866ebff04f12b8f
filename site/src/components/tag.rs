//! Small pill label for technologies.

use leptos::prelude::*;

use crate::styles::{StyleRule, use_styles};

pub const TAG_STYLES: StyleRule = StyleRule::new(
    "tag",
    ".tag{display:inline-block;font-family:'Ubuntu Mono',monospace;font-size:.875rem;\
padding:.125rem .5rem;border-radius:.125rem;background:var(--primary-color);color:#fff;}\
.tag--inverted{background:#fff;color:var(--primary-color);}\
.case-preview__tags .tag{margin-left:.25rem;margin-top:.25rem;}",
);

#[component]
pub fn Tag(#[prop(optional)] inverted: bool, children: Children) -> impl IntoView {
    let class = if inverted { "tag tag--inverted" } else { "tag" };
    use_styles(TAG_STYLES);
    view! {
        <span class=class>{children()}</span>
    }
}
