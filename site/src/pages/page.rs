//! Generic content page at `/<slug>` or `/page?slug=<slug>`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::components::header::Header;
use crate::net::api;
use crate::net::types::Page;
use crate::pages::not_found::NotFound;
use crate::state::content::SharedContent;
use crate::styles::{StyleRule, use_styles};
use crate::util::{links, markdown};

pub const CONTENT_PAGE_STYLES: StyleRule = StyleRule::new(
    "content-page",
    ".content-page{max-width:800px;margin:0 auto;padding:3rem 1rem;color:var(--text-color);}\
.content-page h1{font-family:'Ubuntu Mono',monospace;color:var(--primary-color);}",
);

#[component]
pub fn ContentPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let content = use_context::<SharedContent>();

    let slug = move || links::resolve_slug(params.with(|p| p.get("slug")), query.with(|q| q.get("slug")));
    let page = Resource::new(slug, move |slug| {
        let content = content.clone();
        async move {
            match slug {
                Some(slug) => api::fetch_page(content, &slug).await,
                None => Ok(None),
            }
        }
    });

    view! {
        <Header/>
        <Suspense fallback=|| ()>
            {move || Suspend::new(async move {
                match page.await {
                    Ok(Some(page)) => view! { <PageBody page=page/> }.into_any(),
                    Ok(None) => view! { <NotFound/> }.into_any(),
                    Err(err) => {
                        log::warn!("page unavailable: {err}");
                        view! { <NotFound/> }.into_any()
                    }
                }
            })}
        </Suspense>
    }
}

#[component]
fn PageBody(page: Page) -> impl IntoView {
    let html = markdown::render(&page.body);
    use_styles(CONTENT_PAGE_STYLES);
    view! {
        <Title text=page.title.clone()/>
        <article class="content-page">
            <h1>{page.title}</h1>
            <div class="content-page__body" inner_html=html></div>
        </article>
    }
}
