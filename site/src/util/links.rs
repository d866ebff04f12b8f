//! Route construction for case and content pages.
//!
//! Each detail route has a pretty path (`/case/acme`, `/om-oss`) and a logical
//! form carrying the slug as a query parameter (`/case?slug=acme`,
//! `/page?slug=om-oss`). Both are routed to the same page component.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Pretty path of a case detail page.
#[must_use]
pub fn case_path(slug: &str) -> String {
    format!("/case/{slug}")
}

/// Pretty path of a generic content page.
#[must_use]
pub fn page_path(slug: &str) -> String {
    format!("/{slug}")
}

/// Logical route of a generic content page.
#[must_use]
pub fn page_href(slug: &str) -> String {
    format!("/page?slug={slug}")
}

/// Pick the slug from a path parameter, falling back to the `slug` query value.
#[must_use]
pub fn resolve_slug(param: Option<String>, query: Option<String>) -> Option<String> {
    param.or(query).filter(|slug| !slug.is_empty())
}
