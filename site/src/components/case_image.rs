//! Responsive `<picture>` for a case image, optionally deferred.

use leptos::prelude::*;

use crate::net::types::Media;
use crate::util::image::{EMPTY_SRCSET, PLACEHOLDER_SRC, ResponsiveImage, SIZES};
use crate::util::lazy_load::PENDING_CLASS;

/// Renders a WebP `<source>` plus a fallback `<img>`.
///
/// With `lazy` set the real sources go into `data-*` attributes and a
/// placeholder is shown until the image nears the viewport.
#[component]
pub fn CaseImage(media: Media, #[prop(optional)] lazy: bool) -> impl IntoView {
    let ResponsiveImage { src, srcset, srcset_webp } = ResponsiveImage::new(&media.file.url);
    let alt = media.title;

    if !lazy {
        return view! {
            <picture>
                <source type="image/webp" srcset=srcset_webp sizes=SIZES/>
                <img class="case-image" alt=alt src=src srcset=srcset sizes=SIZES/>
            </picture>
        }
        .into_any();
    }

    let image_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(image) = image_ref.get() {
            crate::util::lazy_load::observe(&image);
        }
    });

    view! {
        <picture>
            <source
                type="image/webp"
                srcset=EMPTY_SRCSET
                data-srcset=srcset_webp
                data-sizes=SIZES
            />
            <img
                node_ref=image_ref
                class=format!("case-image {PENDING_CLASS}")
                alt=alt
                src=PLACEHOLDER_SRC
                data-src=src
                data-srcset=srcset
                data-sizes=SIZES
            />
        </picture>
    }
    .into_any()
}
