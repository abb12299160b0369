// src/presentation/http/extractors.rs
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header, request::Parts},
    response::Response,
};
use std::convert::Infallible;

use super::controllers::pages;

/// The `{id}` path segment of an article route. Only ASCII digits match;
/// anything else is answered like an unknown route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleIdParam(pub i64);

impl<S> FromRequestParts<S> for ArticleIdParam
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| pages::not_found_page())?;

        parse_article_id(&raw)
            .map(Self)
            .ok_or_else(pages::not_found_page)
    }
}

pub fn parse_article_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Submitted article fields. The body is decoded leniently: a missing field,
/// a non-form body or an unreadable body all yield empty strings, which then
/// fail validation like any other empty value. A repeated field keeps its
/// first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArticleFormInput {
    pub title: String,
    pub body: String,
}

impl ArticleFormInput {
    pub fn decode(raw: &[u8]) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(raw).unwrap_or_default();
        let first = |field: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == field)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };

        Self {
            title: first("title"),
            body: first("body"),
        }
    }
}

impl<S> FromRequest<S> for ArticleFormInput
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_urlencoded_form(req.headers()) {
            return Ok(Self::default());
        }

        match Bytes::from_request(req, state).await {
            Ok(raw) => Ok(Self::decode(&raw)),
            Err(err) => {
                tracing::warn!(error = %err, "article form body could not be read");
                Ok(Self::default())
            }
        }
    }
}

fn is_urlencoded_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}
