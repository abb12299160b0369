use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::{named_routes::RouteError, views::ViewError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const NOT_FOUND_MESSAGE: &str = "404 article not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "500 internal server error";

/// Terminal failure of a request, answered with a plain-text body.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: &'static str,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_not_found() {
            Self::not_found()
        } else {
            tracing::error!(error = %err, "storage failure while handling request");
            Self::internal()
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ViewError> for HttpError {
    fn from(err: ViewError) -> Self {
        tracing::error!(error = %err, "failed to render view");
        Self::internal()
    }
}

impl From<RouteError> for HttpError {
    fn from(err: RouteError) -> Self {
        tracing::error!(error = %err, "failed to build route url");
        Self::internal()
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
