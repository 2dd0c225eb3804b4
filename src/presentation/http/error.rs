// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error returned by the HTML handlers.
///
/// Every failure is answered with 500 and a generic body; the cause is only
/// written to the log so upstream details never reach the visitor.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_client_error() {
            tracing::warn!(error = %err, "rejected search request");
        } else {
            tracing::error!(error = %err, "search request failed");
        }

        let status = match err {
            ApplicationError::Domain(_)
            | ApplicationError::Validation(_)
            | ApplicationError::Upstream(_)
            | ApplicationError::UpstreamStatus(_)
            | ApplicationError::Timeout
            | ApplicationError::Decode(_)
            | ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self { status }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = self
            .status
            .canonical_reason()
            .unwrap_or("error")
            .to_string();
        (self.status, body).into_response()
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
