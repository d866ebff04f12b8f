//! Button switching between the light and dark variable sets.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::styles::{StyleRule, use_styles};
use crate::util::dark_mode;

pub const THEME_TOGGLE_STYLES: StyleRule = StyleRule::new(
    "theme-toggle",
    ".theme-toggle{background:none;border:1px solid var(--text-color-secondary);border-radius:999px;\
color:var(--text-color);cursor:pointer;padding:.25rem .75rem;margin-left:1rem;}",
);

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = use_context::<RwSignal<UiState>>().unwrap_or_else(|| RwSignal::new(UiState::default()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|s| s.dark_mode = dark);
    });

    let on_click = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|s| s.dark_mode = next);
    };

    use_styles(THEME_TOGGLE_STYLES);
    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-pressed=move || if ui.get().dark_mode { "true" } else { "false" }
            on:click=on_click
        >
            {move || if ui.get().dark_mode { "Ljust läge" } else { "Mörkt läge" }}
        </button>
    }
}
