use std::path::PathBuf;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use site::net::types::{Media, MediaFile};
use site::state::content::SiteContent;
use tower::ServiceExt;

use super::*;
use crate::config::SiteConfig;
use crate::routes::api_routes;

fn state() -> AppState {
    let case = Case {
        title: "Acme".to_owned(),
        slug: "acme".to_owned(),
        media: vec![Media {
            file: MediaFile { url: "https://cdn/x.jpg".to_owned() },
            title: "Acme".to_owned(),
        }],
        technologies: vec!["React".to_owned()],
        summary: None,
        body: None,
    };
    let page = Page { title: "Kontakt".to_owned(), slug: "kontakt".to_owned(), body: "Hej".to_owned() };
    let config = SiteConfig {
        port: 0,
        content_dir: PathBuf::from("content"),
        static_dir: PathBuf::from("public/static"),
    };
    AppState::new(SiteContent::new(vec![case], vec![page]), config)
}

async fn get(uri: &str) -> Response {
    api_routes(state())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json(resp: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn list_cases_returns_all_cases() {
    let resp = get("/api/cases").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["slug"], "acme");
    assert_eq!(body[0]["media"][0]["file"]["url"], "https://cdn/x.jpg");
}

#[tokio::test]
async fn get_case_by_slug() {
    let resp = get("/api/cases/acme").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["technologies"][0], "React");
}

#[tokio::test]
async fn unknown_case_is_not_found() {
    assert_eq!(get("/api/cases/nope").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_page_by_slug() {
    let resp = get("/api/pages/kontakt").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json(resp).await["body"], "Hej");
    assert_eq!(get("/api/pages/nope").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(get("/healthz").await.status(), StatusCode::OK);
}
