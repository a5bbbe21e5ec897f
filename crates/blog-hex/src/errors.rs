use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blog_types::ports::RepoError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown or unusable id; rendered as `{"message": ...}`.
    #[error("{0}")]
    NotFound(&'static str),

    /// Required fields absent; rendered as `{"errorMessage": ...}`.
    #[error("{0}")]
    Invalid(&'static str),

    /// Gateway rejection; rendered as `{"error": ..., "err": <raw>}`.
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: RepoError,
    },
}

impl AppError {
    pub fn persistence(message: &'static str) -> impl FnOnce(RepoError) -> Self {
        move |source| AppError::Persistence { message, source }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorBody<'a> {
    Message {
        message: &'a str,
    },
    Invalid {
        #[serde(rename = "errorMessage")]
        error_message: &'a str,
    },
    Persistence {
        error: &'a str,
        err: &'a RepoError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match &self {
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, ErrorBody::Message { message: m }),
            AppError::Invalid(m) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::Invalid { error_message: m },
            ),
            AppError::Persistence { message, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::Persistence {
                    error: message,
                    err: source,
                },
            ),
        };

        let body = serde_json::to_string(&body)
            .unwrap_or_else(|_| "{\"error\":\"internal serialization\"}".into());
        (code, [("content-type", "application/json")], body).into_response()
    }
}
