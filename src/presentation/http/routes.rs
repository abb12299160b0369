// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, pages};
use crate::presentation::http::named_routes::{
    ABOUT, ARTICLES_ADD, ARTICLES_DELETE, ARTICLES_EDIT, ARTICLES_INDEX, ARTICLES_SHOW,
    ARTICLES_STORE, ARTICLES_UPDATE, HOME,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// Routes keyed by the named-route table. Paths sharing a pattern with
/// different methods (`articles.show` / `articles.update`) are merged by axum.
pub fn build_router(state: HttpState) -> Router {
    for route in state.routes.iter() {
        tracing::debug!(name = route.name, method = %route.method, path = route.pattern, "route registered");
    }

    Router::new()
        .route(HOME.pattern, get(pages::home))
        .route(ABOUT.pattern, get(pages::about))
        .route(ARTICLES_INDEX.pattern, get(articles::index))
        .route(ARTICLES_STORE.pattern, post(articles::store))
        .route(ARTICLES_ADD.pattern, get(articles::add))
        .route(ARTICLES_SHOW.pattern, get(articles::show))
        .route(ARTICLES_UPDATE.pattern, post(articles::update))
        .route(ARTICLES_EDIT.pattern, get(articles::edit))
        .route(ARTICLES_DELETE.pattern, post(articles::delete))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

/// The router wrapped so `/articles/` and `/articles` reach the same handler.
/// Trailing slashes have to be trimmed before routing, so this sits outside
/// the router rather than being one of its layers.
pub fn build_app(state: HttpState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
