//! Case preview card: responsive image, parallax title, technology tags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page renders one card per case. A case without media contributes
//! nothing to the list. Cards after the sixth defer their image. On desktop
//! viewports (decided once, when the card is created) pointer movement drives
//! the title's [`Parallax`] offset; hover reveals are pure CSS.

#[cfg(test)]
#[path = "case_preview_test.rs"]
mod case_preview_test;

use leptos::prelude::*;

use crate::components::case_image::CaseImage;
use crate::components::tag::Tag;
use crate::components::visually_hidden::VisuallyHidden;
use crate::net::types::Case;
use crate::styles::{StyleRule, use_styles};
use crate::util::image::is_lazy;
use crate::util::links::case_path;
use crate::util::parallax::Parallax;
use crate::util::viewport::Viewport;

pub const CASE_PREVIEW_STYLES: StyleRule = StyleRule::new(
    "case-preview",
    ".case-preview{position:relative;overflow:hidden;display:block;width:100%;padding:.5rem;\
box-sizing:border-box;cursor:pointer;outline:none;}\
.case-preview:focus{outline:2px solid #e4570e;}\
.case-preview__image{position:relative;overflow:hidden;border-radius:.125rem;background:#fff;\
transform:scale(1);transition:all .2s;}\
.case-image{display:block;width:100%;will-change:transform;}\
.case-preview__title{position:relative;width:100%;font-family:'Ubuntu Mono',monospace;\
font-weight:700;font-size:1.125rem;color:var(--primary-color);}\
.case-preview__tags{position:absolute;bottom:0;right:0;padding:1rem;display:none;\
flex-wrap:wrap;flex-direction:row-reverse;align-items:flex-end;opacity:0;z-index:10;width:50%;}\
@media (min-width:768px){\
.case-preview{width:50%;}\
.case-preview__title-box{position:absolute;inset:0;display:flex;align-items:center;\
border-radius:.125rem;background:#000;pointer-events:none;mix-blend-mode:multiply;opacity:0;\
transform:translate3d(-100px,0,0);transition:all .3s;z-index:2;}\
.case-preview__title{color:#fff;font-size:1.5rem;padding:0 5rem;}\
.case-preview__tags{display:flex;}\
.case-preview:hover{z-index:1;}\
.case-preview:hover .case-preview__image{z-index:1;transform:scale(1.1);\
box-shadow:0 20px 25px -5px rgba(0,0,0,.1),0 10px 10px -5px rgba(0,0,0,.04);}\
.case-preview:hover .case-preview__title-box,.case-preview:hover .case-preview__tags{opacity:1;\
transform:translate3d(0px,0,0);}\
.case-preview:hover .case-image{opacity:.5;}}\
@media (min-width:1280px){.case-preview__title{font-size:2.25rem;}}",
);

/// One card in the case list. `index` is the zero-based list position.
#[component]
pub fn CasePreview(case: Case, index: usize) -> impl IntoView {
    let media = case.preview_media().cloned();
    let Case { title, slug, technologies, .. } = case;

    let enabled = parallax_enabled();
    let parallax = RwSignal::new(Parallax::default());
    let frames_running = StoredValue::new(false);

    let on_move = move |ev: leptos::ev::PointerEvent| {
        let input = PointerInput::Move(f64::from(ev.movement_x()), f64::from(ev.movement_y()));
        if parallax.try_update(|p| apply_pointer(enabled, p, input)) == Some(true) {
            start_frames(parallax, frames_running);
        }
    };
    let on_leave = move |_: leptos::ev::PointerEvent| {
        if parallax.try_update(|p| apply_pointer(enabled, p, PointerInput::Leave)) == Some(true) {
            start_frames(parallax, frames_running);
        }
    };
    let title_style = move || format!("transform: {}", parallax.with(Parallax::transform));

    media.map(|media| {
        let tags = technologies
            .into_iter()
            .map(|tech| view! { <Tag inverted=true>{tech}</Tag> })
            .collect_view();

        use_styles(CASE_PREVIEW_STYLES);
        view! {
            <a
                class="case-preview"
                href=case_path(&slug)
                tabindex="0"
                on:pointermove=on_move
                on:pointerleave=on_leave
            >
                <div class="case-preview__image">
                    <CaseImage media=media lazy=is_lazy(index)/>
                </div>
                <div class="case-preview__title-box">
                    <div class="case-preview__title" aria-hidden="true" style=title_style>
                        {title.clone()}
                    </div>
                </div>
                <div class="case-preview__tags">{tags}</div>
                <VisuallyHidden>{title}</VisuallyHidden>
            </a>
        }
    })
}

/// Whether cards created now should animate their title. Read once per card.
fn parallax_enabled() -> bool {
    use_context::<Viewport>().unwrap_or_default().is_desktop_capable()
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum PointerInput {
    Move(f64, f64),
    Leave,
}

/// Feed one pointer event into the spring. Returns `true` when frames should run.
fn apply_pointer(enabled: bool, parallax: &mut Parallax, input: PointerInput) -> bool {
    if !enabled {
        return false;
    }
    match input {
        PointerInput::Move(dx, dy) => parallax.pointer_move(dx, dy),
        PointerInput::Leave => parallax.pointer_leave(),
    }
    true
}

/// Drive the spring with animation frames until it settles.
#[cfg(feature = "hydrate")]
fn start_frames(parallax: RwSignal<Parallax>, running: StoredValue<bool>) {
    if running.get_value() {
        return;
    }
    running.set_value(true);
    schedule_frame(parallax, running, js_sys::Date::now());
}

#[cfg(feature = "hydrate")]
fn schedule_frame(parallax: RwSignal<Parallax>, running: StoredValue<bool>, last: f64) {
    request_animation_frame(move || {
        let now = js_sys::Date::now();
        parallax.update(|p| p.tick(now - last));
        if parallax.with_untracked(Parallax::is_animating) {
            schedule_frame(parallax, running, now);
        } else {
            running.set_value(false);
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_frames(_parallax: RwSignal<Parallax>, _running: StoredValue<bool>) {}
