//! Content DTOs served by the content API and loaded from YAML on the server.
//!
//! Cases and pages are read-only inputs: components receive them as props and
//! never mutate them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A portfolio work item shown as a preview card and a detail page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub title: String,
    /// URL segment for `/case/<slug>`.
    pub slug: String,
    /// Ordered media; the first item is the preview image.
    #[serde(default)]
    pub media: Vec<Media>,
    /// Technology tags in display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Short lead paragraph for the detail page.
    #[serde(default)]
    pub summary: Option<String>,
    /// Markdown body for the detail page.
    #[serde(default)]
    pub body: Option<String>,
}

impl Case {
    /// The image used by the preview card, if the case has any media.
    #[must_use]
    pub fn preview_media(&self) -> Option<&Media> {
        self.media.first()
    }
}

/// Reference to an externally hosted image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub file: MediaFile,
    /// Used as the image alt text.
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    /// Base asset URL without query parameters.
    pub url: String,
}

/// A generic content page addressed by slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub slug: String,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
}
