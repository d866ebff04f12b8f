//! Site content loading.
//!
//! DESIGN
//! ======
//! Content lives in YAML files inside one directory: `cases.yaml` (required)
//! and `pages.yaml` (optional). Both are ordered lists; the order is the
//! display order. Content is read once at startup into an immutable
//! [`SiteContent`] that every render shares.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use site::net::types::{Case, Page};
use site::state::content::SiteContent;

pub const CASES_FILE: &str = "cases.yaml";
pub const PAGES_FILE: &str = "pages.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: serde_yaml::Error },
    #[error("duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },
}

/// Load and validate every content file in `dir`.
pub fn load_dir(dir: &Path) -> Result<SiteContent, ContentError> {
    let cases_path = dir.join(CASES_FILE);
    let cases: Vec<Case> = parse_file(&cases_path, &read(&cases_path)?)?;

    let pages_path = dir.join(PAGES_FILE);
    let pages: Vec<Page> = match std::fs::read_to_string(&pages_path) {
        Ok(raw) => parse_file(&pages_path, &raw)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(source) => return Err(ContentError::Read { path: pages_path, source }),
    };

    build(cases, pages)
}

/// Validate parsed content and freeze it.
pub fn build(cases: Vec<Case>, pages: Vec<Page>) -> Result<SiteContent, ContentError> {
    ensure_unique("case", cases.iter().map(|c| c.slug.as_str()))?;
    ensure_unique("page", pages.iter().map(|p| p.slug.as_str()))?;
    for case in cases.iter().filter(|c| c.media.is_empty()) {
        tracing::warn!(slug = %case.slug, "case has no media and will not be listed");
    }
    Ok(SiteContent::new(cases, pages))
}

fn read(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Read { path: path.to_owned(), source })
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path, raw: &str) -> Result<Vec<T>, ContentError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(raw).map_err(|source| ContentError::Parse { path: path.to_owned(), source })
}

fn ensure_unique<'a>(kind: &'static str, slugs: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for slug in slugs {
        if !seen.insert(slug) {
            return Err(ContentError::DuplicateSlug { kind, slug: slug.to_owned() });
        }
    }
    Ok(())
}
