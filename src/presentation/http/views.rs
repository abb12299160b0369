// src/presentation/http/views.rs
use crate::presentation::http::named_routes::{NamedRoutes, RouteError};
use serde::Serialize;
use std::{collections::HashMap, sync::Arc};
use tera::{Context, Tera, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Renders the HTML views under the configured template directory.
///
/// Two helpers are available to every template:
/// - `route_name_to_url(name="articles.show", id=...)` builds a URL from a
///   route name; every argument besides `name` is a route parameter.
/// - `int64_to_string(num=...)` formats an integer as a decimal string.
pub struct ViewRenderer {
    tera: Tera,
}

impl ViewRenderer {
    pub fn new(template_dir: &str, routes: Arc<NamedRoutes>) -> Result<Self, ViewError> {
        let glob = format!("{}/**/*.html", template_dir.trim_end_matches('/'));
        let mut tera = Tera::new(&glob)?;
        tera.autoescape_on(vec![".html"]);
        tera.register_function("route_name_to_url", RouteNameToUrl { routes });
        tera.register_function("int64_to_string", Int64ToString);

        tracing::debug!(
            templates = tera.get_template_names().count(),
            dir = template_dir,
            "templates loaded"
        );
        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, ViewError> {
        Ok(self.tera.render(template, context)?)
    }

    pub fn render_serialize<T: Serialize>(
        &self,
        template: &str,
        data: &T,
    ) -> Result<String, ViewError> {
        let context = Context::from_serialize(data)?;
        self.render(template, &context)
    }
}

struct RouteNameToUrl {
    routes: Arc<NamedRoutes>,
}

impl tera::Function for RouteNameToUrl {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let name = args
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| tera::Error::msg("route_name_to_url requires a string `name`"))?;

        let mut params = Vec::with_capacity(args.len().saturating_sub(1));
        for (key, value) in args.iter().filter(|(key, _)| key.as_str() != "name") {
            params.push((key.as_str(), param_to_string(key, value)?));
        }
        let borrowed: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

        self.routes
            .url(name, &borrowed)
            .map(Value::String)
            .map_err(|err: RouteError| tera::Error::msg(err.to_string()))
    }

    // Parameter values are percent-encoded, so the URL needs no HTML escaping.
    fn is_safe(&self) -> bool {
        true
    }
}

fn param_to_string(key: &str, value: &Value) -> tera::Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(tera::Error::msg(format!(
            "route parameter `{key}` must be a string or number, got {other}"
        ))),
    }
}

struct Int64ToString;

impl tera::Function for Int64ToString {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        args.get("num")
            .and_then(Value::as_i64)
            .map(|num| Value::String(num.to_string()))
            .ok_or_else(|| tera::Error::msg("int64_to_string requires an integer `num`"))
    }
}
