//! Case detail page at `/case/<slug>` or `/case?slug=<slug>`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::case_image::CaseImage;
use crate::components::header::Header;
use crate::components::tag::Tag;
use crate::net::api;
use crate::net::types::Case;
use crate::pages::not_found::NotFound;
use crate::state::content::SharedContent;
use crate::styles::{StyleRule, use_styles};
use crate::util::{links, markdown};

pub const CASE_PAGE_STYLES: StyleRule = StyleRule::new(
    "case-page",
    ".case-page{max-width:1000px;margin:0 auto;padding:3rem 1rem;color:var(--text-color);}\
.case-page__title{font-family:'Ubuntu Mono',monospace;color:var(--primary-color);}\
.case-page__summary{font-size:1.25rem;color:var(--text-color-secondary);}\
.case-page__tags{display:flex;flex-wrap:wrap;gap:.25rem;margin-bottom:2rem;}\
.case-page__media{margin-bottom:1rem;}",
);

#[component]
pub fn CasePage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let content = use_context::<SharedContent>();

    let slug = move || links::resolve_slug(params.with(|p| p.get("slug")), query.with(|q| q.get("slug")));
    let case = Resource::new(slug, move |slug| {
        let content = content.clone();
        async move {
            match slug {
                Some(slug) => api::fetch_case(content, &slug).await,
                None => Ok(None),
            }
        }
    });

    view! {
        <Header/>
        <Suspense fallback=|| ()>
            {move || Suspend::new(async move {
                match case.await {
                    Ok(Some(case)) => view! { <CaseDetail case=case/> }.into_any(),
                    Ok(None) => view! { <NotFound/> }.into_any(),
                    Err(err) => {
                        log::warn!("case unavailable: {err}");
                        view! { <NotFound/> }.into_any()
                    }
                }
            })}
        </Suspense>
    }
}

#[component]
fn CaseDetail(case: Case) -> impl IntoView {
    let Case { title, media, technologies, summary, body, .. } = case;
    let body = body.map(|md| markdown::render(&md));

    use_styles(CASE_PAGE_STYLES);
    view! {
        <Title text=title.clone()/>
        <article class="case-page">
            <h1 class="case-page__title">{title}</h1>
            {summary.map(|text| view! { <p class="case-page__summary">{text}</p> })}
            <div class="case-page__tags">
                {technologies.into_iter().map(|tech| view! { <Tag>{tech}</Tag> }).collect_view()}
            </div>
            {media
                .into_iter()
                .map(|item| view! { <div class="case-page__media"><CaseImage media=item/></div> })
                .collect_view()}
            {body.map(|html| view! { <div class="case-page__body" inner_html=html></div> })}
        </article>
    }
}
