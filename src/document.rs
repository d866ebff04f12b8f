//! Per-request style collection around page rendering.
//!
//! Every page request gets a fresh [`ServerStyleSheet`]. The middleware stores
//! it in the request extensions before the render starts, the Leptos context
//! closure hands it to the component tree, and [`collect_styles`] seals it once
//! the response body has been fully produced. The collected `<style>` tags are
//! then spliced into the document head, so rules registered after an async data
//! step are included.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use site::styles::{ServerStyleSheet, collect_styles};

const HEAD_CLOSE: &str = "</head>";

/// Axum middleware wrapping one page render with a style sheet collector.
pub async fn collect_page_styles(mut req: Request, next: Next) -> Response {
    let sheet = ServerStyleSheet::new();
    req.extensions_mut().insert(sheet.clone());
    let path = req.uri().path().to_owned();

    let (mut parts, body) = collect_styles(&sheet, async move {
        let (parts, body) = next.run(req).await.into_parts();
        (parts, axum::body::to_bytes(body, usize::MAX).await)
    })
    .await;

    let body = match body {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(%path, error = %err, "page render failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    tracing::debug!(%path, rules = sheet.len(), status = %parts.status, "page styles collected");
    if !is_html(&parts.headers) || sheet.is_empty() {
        return Response::from_parts(parts, Body::from(body));
    }

    let page = inject_into_head(&body, &sheet.style_tags());
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(page))
}

/// Responses without a content type are treated as HTML; Leptos always sets one.
fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .is_none_or(|value| value.to_str().is_ok_and(|value| value.starts_with("text/html")))
}

/// Insert `tags` right before the first `</head>`. Bodies without a head are
/// returned unchanged.
fn inject_into_head(body: &Bytes, tags: &str) -> Bytes {
    let Ok(html) = std::str::from_utf8(body) else {
        return body.clone();
    };
    let Some(at) = html.find(HEAD_CLOSE) else {
        tracing::warn!("rendered page has no </head>; collected styles dropped");
        return body.clone();
    };
    let mut out = String::with_capacity(html.len() + tags.len());
    out.push_str(&html[..at]);
    out.push_str(tags);
    out.push_str(&html[at..]);
    Bytes::from(out)
}

/// Forward the request's sheet into the Leptos render context.
///
/// Called from the route context closure, where `leptos_axum` has already
/// provided the request [`Parts`].
pub fn provide_request_sheet() {
    let sheet = use_context::<Parts>().and_then(|parts| parts.extensions.get::<ServerStyleSheet>().cloned());
    match sheet {
        Some(sheet) => provide_context(sheet),
        None => tracing::warn!("page rendered without a style sheet collector"),
    }
}
