use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::net::types::{Media, MediaFile};
use crate::styles::ServerStyleSheet;
use crate::util::parallax::ParallaxState;
use crate::util::viewport::FixedViewport;

fn acme() -> Case {
    Case {
        title: "Acme".to_owned(),
        slug: "acme".to_owned(),
        media: vec![Media {
            file: MediaFile { url: "https://cdn/x.jpg".to_owned() },
            title: "Acme".to_owned(),
        }],
        technologies: vec!["React".to_owned()],
        summary: None,
        body: None,
    }
}

fn render(case: Case, index: usize) -> String {
    Owner::new().with(|| view! { <CasePreview case=case index=index/> }.to_html())
}

#[test]
fn case_without_media_renders_nothing() {
    let mut case = acme();
    case.media.clear();
    let html = render(case, 0);
    assert!(!html.contains("<a"), "unexpected markup: {html}");
    assert!(!html.contains("Acme"));
}

#[test]
fn card_links_to_case_detail() {
    let html = render(acme(), 2);
    assert!(html.contains(r#"href="/case/acme""#), "{html}");
    assert!(html.contains(r#"tabindex="0""#));
}

#[test]
fn early_card_loads_eagerly() {
    let html = render(acme(), 2);
    assert!(!html.contains("lazyload"));
    assert!(!html.contains("case-placeholder.jpg"));
    assert!(!html.contains("data-src"));
    assert!(html.contains("https://cdn/x.jpg?q=90"));
}

#[test]
fn card_after_sixth_is_deferred() {
    let html = render(acme(), 6);
    assert!(html.contains("lazyload"));
    assert!(html.contains(r#"src="/static/case-placeholder.jpg""#));
    assert!(html.contains("data-src="));
    assert!(html.contains("data-srcset="));
    assert!(html.contains("data-sizes="));
}

#[test]
fn sixth_card_is_still_eager() {
    assert!(!render(acme(), 5).contains("lazyload"));
}

#[test]
fn title_is_announced_exactly_once() {
    let html = render(acme(), 0);
    assert_eq!(html.matches(r#"class="visually-hidden""#).count(), 1);
    assert_eq!(html.matches(r#"aria-hidden="true""#).count(), 1);
}

#[test]
fn renders_one_tag_per_technology() {
    let mut case = acme();
    let html = render(case.clone(), 2);
    assert_eq!(html.matches("tag--inverted").count(), 1);
    assert!(html.contains("React"));

    case.technologies.push("Rust".to_owned());
    let html = render(case, 2);
    assert_eq!(html.matches("tag--inverted").count(), 2);
}

#[test]
fn title_starts_at_rest() {
    let html = render(acme(), 0);
    assert!(html.contains("translate3d(0px, 0px, 0) scale(1)"));
}

#[test]
fn cards_register_each_rule_once() {
    let sheet = ServerStyleSheet::new();
    Owner::new().with(|| {
        provide_context(sheet.clone());
        let html = view! {
            <CasePreview case=acme() index=0/>
            <CasePreview case=acme() index=1/>
        }
        .to_html();
        assert!(!html.contains("<style"), "styles must not render in place: {html}");
    });
    let mut ids: Vec<_> = sheet.rules().iter().map(|rule| rule.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["case-preview", "tag", "visually-hidden"]);
}

fn enabled_with(viewport: FixedViewport) -> bool {
    Owner::new().with(|| {
        provide_context(Viewport::new(viewport));
        parallax_enabled()
    })
}

#[test]
fn narrow_viewport_keeps_title_at_rest() {
    let enabled = enabled_with(FixedViewport(false));
    assert!(!enabled);

    let mut parallax = Parallax::default();
    assert!(!apply_pointer(enabled, &mut parallax, PointerInput::Move(40.0, -10.0)));
    assert!(!apply_pointer(enabled, &mut parallax, PointerInput::Leave));
    assert_eq!(parallax.state(), ParallaxState::AtRest);
    assert!(!parallax.is_animating());
}

#[test]
fn desktop_viewport_starts_tracking_on_pointer_move() {
    let enabled = enabled_with(FixedViewport(true));
    assert!(enabled);

    let mut parallax = Parallax::default();
    assert!(apply_pointer(enabled, &mut parallax, PointerInput::Move(40.0, -10.0)));
    assert!(matches!(parallax.state(), ParallaxState::Tracking { .. }));
    assert!(parallax.is_animating());

    assert!(apply_pointer(enabled, &mut parallax, PointerInput::Leave));
    assert_eq!(parallax.state(), ParallaxState::Returning);
}
