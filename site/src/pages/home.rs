//! Landing page: header plus one preview card per case.

use leptos::prelude::*;

use crate::components::case_preview::CasePreview;
use crate::components::header::Header;
use crate::net::api;
use crate::net::types::Case;
use crate::state::content::SharedContent;
use crate::styles::{StyleRule, use_styles};

pub const HOME_STYLES: StyleRule = StyleRule::new(
    "home",
    ".case-list{display:flex;flex-wrap:wrap;max-width:1400px;margin:0 auto;padding:2rem 1rem;}\
@media (min-width:768px){.case-list{padding:3rem 3.5rem;}}",
);

#[component]
pub fn HomePage() -> impl IntoView {
    let content = use_context::<SharedContent>();
    let cases = Resource::new(|| (), move |()| api::fetch_cases(content.clone()));

    use_styles(HOME_STYLES);
    view! {
        <Header/>
        <main class="case-list">
            <Suspense fallback=|| ()>
                {move || Suspend::new(async move {
                    match cases.await {
                        Ok(cases) => Some(case_cards(cases)),
                        Err(err) => {
                            log::warn!("case list unavailable: {err}");
                            None
                        }
                    }
                })}
            </Suspense>
        </main>
    }
}

fn case_cards(cases: Vec<Case>) -> impl IntoView {
    cases
        .into_iter()
        .enumerate()
        .map(|(index, case)| view! { <CasePreview case=case index=index/> })
        .collect_view()
}
