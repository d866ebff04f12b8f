//! REST helpers for reading site content.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the content
//! API. Server-side (SSR): reads the in-process [`SiteContent`] handed in by
//! the caller, so rendering never loops back through HTTP.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/`Option` outputs instead of panics; an unknown slug is
//! `Ok(None)`, transport failures are `Err(message)`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Case, Page};
use crate::state::content::SharedContent;

#[cfg(any(test, feature = "hydrate"))]
fn case_endpoint(slug: &str) -> String {
    format!("/api/cases/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn page_endpoint(slug: &str) -> String {
    format!("/api/pages/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} failed: {status}")
}

/// Browser fetch futures are `!Send`; resources need `Send`, and the wasm
/// target is single-threaded, so the request is wrapped.
#[cfg(feature = "hydrate")]
async fn get_optional<T: serde::de::DeserializeOwned + 'static>(endpoint: &str) -> Result<Option<T>, String> {
    send_wrapper::SendWrapper::new(get_optional_local::<T>(endpoint.to_owned())).await
}

#[cfg(feature = "hydrate")]
async fn get_optional_local<T: serde::de::DeserializeOwned>(endpoint: String) -> Result<Option<T>, String> {
    let endpoint = endpoint.as_str();
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(request_failed_message(endpoint, resp.status()));
    }
    resp.json::<T>().await.map(Some).map_err(|e| e.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn missing_content() -> String {
    "site content is not available".to_owned()
}

/// Fetch every case in display order from `/api/cases`.
///
/// # Errors
///
/// Returns an error string if the request fails or, on the server, if no
/// content was provided.
pub async fn fetch_cases(local: Option<SharedContent>) -> Result<Vec<Case>, String> {
    #[cfg(feature = "hydrate")]
    {
        let _ = local;
        get_optional::<Vec<Case>>("/api/cases")
            .await?
            .ok_or_else(|| request_failed_message("/api/cases", 404))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        local.map(|content| content.cases().to_vec()).ok_or_else(missing_content)
    }
}

/// Fetch one case by slug from `/api/cases/{slug}`.
///
/// # Errors
///
/// Returns an error string if the request fails or no content is available.
pub async fn fetch_case(local: Option<SharedContent>, slug: &str) -> Result<Option<Case>, String> {
    #[cfg(feature = "hydrate")]
    {
        let _ = local;
        get_optional::<Case>(&case_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let content = local.ok_or_else(missing_content)?;
        Ok(content.case(slug).cloned())
    }
}

/// Fetch one content page by slug from `/api/pages/{slug}`.
///
/// # Errors
///
/// Returns an error string if the request fails or no content is available.
pub async fn fetch_page(local: Option<SharedContent>, slug: &str) -> Result<Option<Page>, String> {
    #[cfg(feature = "hydrate")]
    {
        let _ = local;
        get_optional::<Page>(&page_endpoint(slug)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let content = local.ok_or_else(missing_content)?;
        Ok(content.page(slug).cloned())
    }
}
