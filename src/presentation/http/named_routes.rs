// src/presentation/http/named_routes.rs
//! Named routes: every path the server answers has a symbolic name so pages
//! and redirects can build URLs by name instead of hard-coding paths.
//!
//! Patterns use `{param}` placeholders, the same syntax the axum router
//! accepts, so one table drives both routing and URL generation.

use axum::http::Method;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::HashMap;
use thiserror::Error;

/// Characters escaped in a generated path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRoute {
    pub name: &'static str,
    pub method: Method,
    pub pattern: &'static str,
}

impl NamedRoute {
    pub const fn new(name: &'static str, method: Method, pattern: &'static str) -> Self {
        Self {
            name,
            method,
            pattern,
        }
    }
}

pub const HOME: NamedRoute = NamedRoute::new("home", Method::GET, "/");
pub const ABOUT: NamedRoute = NamedRoute::new("about", Method::GET, "/about");
pub const ARTICLES_SHOW: NamedRoute =
    NamedRoute::new("articles.show", Method::GET, "/articles/{id}");
pub const ARTICLES_INDEX: NamedRoute =
    NamedRoute::new("articles.index", Method::GET, "/articles");
pub const ARTICLES_STORE: NamedRoute =
    NamedRoute::new("articles.store", Method::POST, "/articles");
pub const ARTICLES_ADD: NamedRoute =
    NamedRoute::new("articles.add", Method::GET, "/articles/add");
pub const ARTICLES_EDIT: NamedRoute =
    NamedRoute::new("articles.edit", Method::GET, "/articles/{id}/edit");
pub const ARTICLES_UPDATE: NamedRoute =
    NamedRoute::new("articles.update", Method::POST, "/articles/{id}");
pub const ARTICLES_DELETE: NamedRoute =
    NamedRoute::new("articles.delete", Method::POST, "/articles/{id}/delete");

pub const ALL_ROUTES: [NamedRoute; 9] = [
    HOME,
    ABOUT,
    ARTICLES_SHOW,
    ARTICLES_INDEX,
    ARTICLES_STORE,
    ARTICLES_ADD,
    ARTICLES_EDIT,
    ARTICLES_UPDATE,
    ARTICLES_DELETE,
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route named {0:?}")]
    UnknownRoute(String),
    #[error("route {route:?} requires parameter {param:?}")]
    MissingParam { route: String, param: String },
}

#[derive(Debug, Clone)]
pub struct NamedRoutes {
    by_name: HashMap<&'static str, NamedRoute>,
}

/// The table is always [`ALL_ROUTES`], the same constants the router registers.
impl Default for NamedRoutes {
    fn default() -> Self {
        Self {
            by_name: ALL_ROUTES.into_iter().map(|r| (r.name, r)).collect(),
        }
    }
}

impl NamedRoutes {
    pub fn get(&self, name: &str) -> Option<&NamedRoute> {
        self.by_name.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedRoute> {
        self.by_name.values()
    }

    /// Build the path for `name`, substituting each `{param}` from `params`.
    /// Parameters the pattern doesn't use are ignored.
    pub fn url(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let mut url = String::with_capacity(route.pattern.len());
        for segment in route.pattern.split('/').skip(1) {
            url.push('/');
            match placeholder(segment) {
                Some(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == param)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| RouteError::MissingParam {
                            route: name.to_string(),
                            param: param.to_string(),
                        })?;
                    url.extend(utf8_percent_encode(value, PATH_SEGMENT));
                }
                None => url.push_str(segment),
            }
        }

        if url.is_empty() {
            url.push('/');
        }
        Ok(url)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}
