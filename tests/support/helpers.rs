// tests/support/helpers.rs
use super::mocks::InMemoryArticleRepository;
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, header};
use axum::response::Response;
use goblog::application::services::ApplicationServices;
use goblog::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use goblog::presentation::http::{
    named_routes::NamedRoutes, routes::build_app, state::HttpState, views::ViewRenderer,
};
use std::sync::Arc;
use tower::util::ServiceExt as _;
use tower_http::normalize_path::NormalizePath;

pub const TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/views");

pub type TestApp = NormalizePath<Router>;

pub fn build_test_state<R>(repo: Arc<R>) -> HttpState
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    let services = Arc::new(ApplicationServices::new(write, read));
    let routes = Arc::new(NamedRoutes::default());
    let views = Arc::new(ViewRenderer::new(TEMPLATE_DIR, Arc::clone(&routes)).expect("templates"));

    HttpState {
        services,
        routes,
        views,
    }
}

pub fn make_test_app<R>(repo: Arc<R>) -> TestApp
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    build_app(build_test_state(repo))
}

pub fn make_in_memory_app() -> (TestApp, Arc<InMemoryArticleRepository>) {
    let repo = Arc::new(InMemoryArticleRepository::new());
    (make_test_app(Arc::clone(&repo)), repo)
}

pub async fn get(app: &TestApp, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

pub async fn post_form(app: &TestApp, uri: &str, fields: &[(&str, &str)]) -> Response {
    let encoded = serde_urlencoded::to_string(fields).unwrap();
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encoded))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

/// POST an arbitrary body, optionally without any `Content-Type`.
pub async fn post_raw(
    app: &TestApp,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response {
    let mut req = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        req = req.header(header::CONTENT_TYPE, content_type);
    }
    app.clone()
        .oneshot(req.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn content_type(resp: &Response) -> &str {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
