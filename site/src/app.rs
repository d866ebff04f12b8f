//! Document shell and root application component.
//!
//! The shell is rendered once per page request on the server. Every style rule
//! registered while the page tree renders is hoisted into `<head>` through
//! `leptos_meta`, next to the static meta tags declared here.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, SsrMode, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{case::CasePage, home::HomePage, not_found::NotFoundPage, page::ContentPage};
use crate::state::menu::Menu;
use crate::state::ui::UiState;
use crate::styles::global::GlobalStyles;
use crate::util::viewport::{BrowserViewport, Viewport};

/// Root document language.
pub const DOCUMENT_LANG: &str = "sv";
/// Browser chrome colour advertised through `<meta name="theme-color">`.
pub const THEME_COLOR: &str = "#C75000";
/// Value of `<meta name="referrer">`; outbound links send no referrer.
pub const REFERRER_POLICY: &str = "no-referrer";
/// Favicon, served from the static directory.
pub const FAVICON_HREF: &str = "/static/favicon.ico";
/// Google Fonts stylesheet for Nunito and Ubuntu Mono.
pub const FONT_STYLESHEET_HREF: &str =
    "https://fonts.googleapis.com/css?family=Nunito:400,600,700%7CUbuntu+Mono:400,700&display=swap";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang=DOCUMENT_LANG>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content=THEME_COLOR/>
                <meta name="referrer" content=REFERRER_POLICY/>
                <link rel="shortcut icon" type="image/x-icon" href=FAVICON_HREF/>
                <link href=FONT_STYLESHEET_HREF rel="stylesheet"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the immutable menu table, the viewport capability and UI state,
/// then sets up routing. Every route renders in async mode so the complete
/// page, including hoisted styles, is produced before the response is sent.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Menu::main());
    if use_context::<Viewport>().is_none() {
        provide_context(Viewport::new(BrowserViewport));
    }
    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <GlobalStyles/>
        <Title text="itiden"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage ssr=SsrMode::Async/>
                <Route path=StaticSegment("case") view=CasePage ssr=SsrMode::Async/>
                <Route
                    path=(StaticSegment("case"), ParamSegment("slug"))
                    view=CasePage
                    ssr=SsrMode::Async
                />
                <Route path=StaticSegment("page") view=ContentPage ssr=SsrMode::Async/>
                <Route path=ParamSegment("slug") view=ContentPage ssr=SsrMode::Async/>
            </Routes>
        </Router>
    }
}
