// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, CreateArticleOutcome, DeleteArticleCommand, UpdateArticleCommand,
        UpdateArticleOutcome,
    },
    queries::articles::GetArticleByIdQuery,
};
use crate::domain::article::FieldErrors;
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    extractors::{ArticleFormInput, ArticleIdParam},
    named_routes::{ARTICLES_INDEX, ARTICLES_SHOW, ARTICLES_STORE, ARTICLES_UPDATE},
    state::HttpState,
};
use axum::{
    Extension,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tera::Context;

pub const NO_CHANGES_MESSAGE: &str = "no changes were made";

#[derive(Serialize)]
struct ArticleFormView<'a> {
    heading: &'a str,
    url: &'a str,
    title: &'a str,
    body: &'a str,
    errors: &'a FieldErrors,
}

fn render_form(state: &HttpState, view: &ArticleFormView<'_>) -> HttpResult<Response> {
    let html = state.views.render_serialize("articles/form.html", view)?;
    Ok(Html(html).into_response())
}

fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let articles = state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()?;

    let mut context = Context::new();
    context.insert("articles", &articles);
    Ok(Html(state.views.render("articles/index.html", &context)?))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Html<String>> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    let mut context = Context::new();
    context.insert("article", &article);
    Ok(Html(state.views.render("articles/show.html", &context)?))
}

pub async fn add(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let url = state.routes.url(ARTICLES_STORE.name, &[])?;
    render_form(
        &state,
        &ArticleFormView {
            heading: "Write an article",
            url: &url,
            title: "",
            body: "",
            errors: &FieldErrors::new(),
        },
    )
}

pub async fn store(
    Extension(state): Extension<HttpState>,
    input: ArticleFormInput,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            title: input.title.clone(),
            body: input.body.clone(),
        })
        .await
        .into_http()?;

    match outcome {
        CreateArticleOutcome::Created(id) => {
            let location = state
                .routes
                .url(ARTICLES_SHOW.name, &[("id", id.to_string().as_str())])?;
            Ok(redirect_found(&location))
        }
        CreateArticleOutcome::Invalid(errors) => {
            let url = state.routes.url(ARTICLES_STORE.name, &[])?;
            render_form(
                &state,
                &ArticleFormView {
                    heading: "Write an article",
                    url: &url,
                    title: &input.title,
                    body: &input.body,
                    errors: &errors,
                },
            )
        }
    }
}

pub async fn edit(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()?;

    let url = state
        .routes
        .url(ARTICLES_UPDATE.name, &[("id", article.id.to_string().as_str())])?;
    render_form(
        &state,
        &ArticleFormView {
            heading: "Edit article",
            url: &url,
            title: &article.title,
            body: &article.body,
            errors: &FieldErrors::new(),
        },
    )
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    input: ArticleFormInput,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: input.title.clone(),
            body: input.body.clone(),
        })
        .await
        .into_http()?;

    match outcome {
        UpdateArticleOutcome::Updated(article_id) => {
            let location = state
                .routes
                .url(ARTICLES_SHOW.name, &[("id", article_id.to_string().as_str())])?;
            Ok(redirect_found(&location))
        }
        UpdateArticleOutcome::Unchanged(_) => Ok(NO_CHANGES_MESSAGE.into_response()),
        UpdateArticleOutcome::Invalid(errors) => {
            let url = state
                .routes
                .url(ARTICLES_UPDATE.name, &[("id", id.to_string().as_str())])?;
            render_form(
                &state,
                &ArticleFormView {
                    heading: "Edit article",
                    url: &url,
                    title: &input.title,
                    body: &input.body,
                    errors: &errors,
                },
            )
        }
    }
}

pub async fn delete(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
) -> HttpResult<Response> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    let location = state.routes.url(ARTICLES_INDEX.name, &[])?;
    Ok(redirect_found(&location))
}
