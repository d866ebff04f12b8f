//! Process-wide CSS: theme variables, base element resets and the body and
//! anchor rules every page relies on.

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;

use std::sync::LazyLock;

use leptos::prelude::*;

use super::sheet::StyleRule;
use super::theme::{DARK, LIGHT};
use super::use_styles;

/// Minimal cross-browser reset.
const REBOOT: &str = "*,*::before,*::after{box-sizing:border-box;}\
html{font-family:sans-serif;line-height:1.15;-webkit-text-size-adjust:100%;}\
body{margin:0;font-size:1rem;font-weight:400;line-height:1.5;color:var(--text-color);text-align:left;}\
h1,h2,h3,h4,h5,h6{margin-top:0;margin-bottom:.5rem;}\
p{margin-top:0;margin-bottom:1rem;}\
ul,ol{margin-top:0;margin-bottom:1rem;}\
img,svg{vertical-align:middle;}\
img{border-style:none;}\
button{border-radius:0;margin:0;font-family:inherit;font-size:inherit;line-height:inherit;}\
[hidden]{display:none!important;}";

const BASE: &str = "body{font-family:Nunito,sans-serif;background:var(--bg-color);transition:background .2s;}\
h2{margin-bottom:0.2rem;}\
a{color:var(--primary-color);text-decoration:none;}\
a:hover{color:var(--primary-color-light);text-decoration:none;}";

static GLOBAL_CSS: LazyLock<String> =
    LazyLock::new(|| [REBOOT.to_owned(), LIGHT.to_css(), DARK.to_css(), BASE.to_owned()].concat());

/// The complete global stylesheet.
#[must_use]
pub fn global_css() -> &'static str {
    GLOBAL_CSS.as_str()
}

#[must_use]
pub fn global_rule() -> StyleRule {
    StyleRule::new("global", global_css())
}

/// Registers the global rule; renders nothing in the body.
#[component]
pub fn GlobalStyles() -> impl IntoView {
    use_styles(global_rule())
}
