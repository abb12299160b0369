use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const CONTACT_EMAIL: &str = "summer@example.com";

pub async fn home() -> Html<&'static str> {
    Html("<h1>Hello, welcome to goblog!</h1>")
}

pub async fn about() -> Html<String> {
    Html(format!(
        "This blog is a place for programming notes. For feedback or suggestions, contact \
         <a href=\"mailto:{CONTACT_EMAIL}\">{CONTACT_EMAIL}</a>"
    ))
}

/// Fallback for requests that match no route.
pub async fn not_found() -> Response {
    not_found_page()
}

pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>Page not found :(</h1><p>If you think this is a mistake, please contact us.</p>"),
    )
        .into_response()
}
