//! Site header: logo link to the root and the main navigation.

use leptos::prelude::*;

use crate::components::logo::Logo;
use crate::components::nav_link::NavLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::menu::{Menu, MenuItem};
use crate::styles::{StyleRule, use_styles};

/// Accessible name of the logo link.
pub const LOGO_LABEL: &str = "itiden.se";

pub const HEADER_STYLES: StyleRule = StyleRule::new(
    "header",
    ".header{background:var(--header-color);}\
.header__content{display:flex;align-items:center;justify-content:center;flex-direction:column;\
flex-wrap:wrap;padding:1.5rem 1rem 0;margin:0 auto;max-width:1400px;}\
.header__logo{fill:var(--logo-color);height:32px;}\
@media (min-width:768px){.header__content{flex-direction:row;justify-content:space-between;\
padding-left:4rem;padding-right:4rem;}.header__logo{height:48px;}}",
);

#[component]
pub fn Header() -> impl IntoView {
    let menu = use_context::<Menu>().unwrap_or_else(Menu::main);

    use_styles(HEADER_STYLES);
    view! {
        <div class="header">
            <div class="header__content">
                <a href="/" aria-label=LOGO_LABEL>
                    <Logo class="header__logo"/>
                </a>
                <nav class="header__menu">
                    {menu.items().iter().map(|item| view! { <MenuEntry item=*item/> }).collect_view()}
                </nav>
                <ThemeToggle/>
            </div>
        </div>
    }
}

#[component]
fn MenuEntry(item: MenuItem) -> impl IntoView {
    let link = item.link();
    view! { <NavLink href=link.as_path>{link.label}</NavLink> }
}
