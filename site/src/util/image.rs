//! Responsive image URL construction and the lazy-loading threshold.
//!
//! Assets are served by an external image host that resizes on the fly from
//! the `q` (quality), `w` (width) and `fm` (format) query parameters.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Width buckets offered to the browser, largest first.
pub const WIDTH_BUCKETS: [u32; 4] = [600, 500, 400, 300];
/// Quality requested for every variant.
pub const QUALITY: u32 = 90;
/// Cards at positions above this index load lazily.
pub const EAGER_LOAD_LAST_INDEX: usize = 5;

/// Layout hint paired with every srcset.
pub const SIZES: &str =
    "(min-width: 768px) calc(100vw / 2), (min-width: 1200px) calc(1200px / 2), 100vw";
/// Shown in place of a lazy image until it nears the viewport.
pub const PLACEHOLDER_SRC: &str = "/static/case-placeholder.jpg";
/// 1x1 transparent GIF; a `<source>` element must carry some srcset.
pub const EMPTY_SRCSET: &str =
    "data:image/gif;base64,R0lGODlhAQABAAAAACH5BAEKAAEALAAAAAABAAEAAAICTAEAOw==";

/// Whether the card at `index` defers loading its image.
#[must_use]
pub fn is_lazy(index: usize) -> bool {
    index > EAGER_LOAD_LAST_INDEX
}

/// Every URL the `<picture>` for one image needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsiveImage {
    /// Default source: the widest fallback-format variant.
    pub src: String,
    /// Fallback-format candidates, one per width bucket.
    pub srcset: String,
    /// WebP candidates, one per width bucket.
    pub srcset_webp: String,
}

impl ResponsiveImage {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            src: variant_url(base_url, WIDTH_BUCKETS[0], false),
            srcset: srcset(base_url, false),
            srcset_webp: srcset(base_url, true),
        }
    }
}

/// URL of one variant: `<base>?q=90[&fm=webp]&w=<width>`.
#[must_use]
pub fn variant_url(base_url: &str, width: u32, webp: bool) -> String {
    if webp {
        format!("{base_url}?q={QUALITY}&fm=webp&w={width}")
    } else {
        format!("{base_url}?q={QUALITY}&w={width}")
    }
}

fn srcset(base_url: &str, webp: bool) -> String {
    WIDTH_BUCKETS
        .iter()
        .map(|&width| format!("{} {width}w", variant_url(base_url, width, webp)))
        .collect::<Vec<_>>()
        .join(",")
}
