//! Deferred image loading.
//!
//! Lazy images are rendered with a placeholder `src` and their real sources in
//! `data-*` attributes. In the browser a shared `IntersectionObserver` watches
//! each one and, when it comes within [`ROOT_MARGIN`] of the viewport, copies
//! the `data-*` values into place on the image and its sibling `<source>`
//! elements, then stops observing it.

#[cfg(test)]
#[path = "lazy_load_test.rs"]
mod lazy_load_test;

/// Class marking an image that still waits for its real source.
pub const PENDING_CLASS: &str = "lazyload";
/// Class set once the real source has been swapped in.
pub const LOADED_CLASS: &str = "lazyloaded";
/// How far outside the viewport loading starts.
pub const ROOT_MARGIN: &str = "200px 0px";

/// `data-*` attribute to real attribute, in the order they are applied.
pub const SWAPPED_ATTRIBUTES: [(&str, &str); 3] =
    [("data-sizes", "sizes"), ("data-srcset", "srcset"), ("data-src", "src")];

/// Pairs of `(attribute, value)` to set on an element that currently carries
/// the given `data-*` attributes. Missing attributes are skipped.
#[must_use]
pub fn swap_plan<F>(mut data_attr: F) -> Vec<(&'static str, String)>
where
    F: FnMut(&str) -> Option<String>,
{
    SWAPPED_ATTRIBUTES
        .iter()
        .filter_map(|(from, to)| data_attr(from).map(|value| (*to, value)))
        .collect()
}

/// Start watching a lazy image. No-op outside the browser.
#[cfg(feature = "hydrate")]
pub fn observe(image: &web_sys::Element) {
    OBSERVER.with(|observer| match observer {
        Some(observer) => observer.observe(image),
        None => reveal(image),
    });
}

#[cfg(feature = "hydrate")]
thread_local! {
    static OBSERVER: Option<web_sys::IntersectionObserver> = create_observer();
}

#[cfg(feature = "hydrate")]
fn create_observer() -> Option<web_sys::IntersectionObserver> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    reveal(&target);
                }
            }
        },
    );
    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            // The observer lives for the whole page.
            callback.forget();
            Some(observer)
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, loading images eagerly: {err:?}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn reveal(image: &web_sys::Element) {
    if let Some(picture) = image.parent_element() {
        if let Ok(sources) = picture.query_selector_all("source") {
            for i in 0..sources.length() {
                let source = sources
                    .item(i)
                    .and_then(|node| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(node).ok());
                if let Some(source) = source {
                    apply_swap(&source);
                }
            }
        }
    }
    apply_swap(image);
    let class_list = image.class_list();
    let _ = class_list.remove_1(PENDING_CLASS);
    let _ = class_list.add_1(LOADED_CLASS);
    log::debug!("lazy image revealed");
}

#[cfg(feature = "hydrate")]
fn apply_swap(element: &web_sys::Element) {
    for (attr, value) in swap_plan(|name| element.get_attribute(name)) {
        let _ = element.set_attribute(attr, &value);
    }
}
