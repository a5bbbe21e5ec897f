mod normalize;
mod posts;
mod security;
mod server;
mod users;

pub use normalize::{normalize_name, uppercase_name};
pub use security::security_headers;
pub use server::{HttpServer, HttpServerConfig};

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;

/// Fixed confirmation body for update and delete.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Path ids are integers; anything else is treated like a missing id.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Unwraps a JSON body, reporting any rejection (wrong content type, bad
/// syntax, wrong field types) as the entity's missing-fields error.
fn json_body<T>(
    body: Result<Json<T>, JsonRejection>,
    missing: &'static str,
) -> Result<T, AppError> {
    match body {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            tracing::debug!(
                status = %rejection.status(),
                reason = %rejection.body_text(),
                "rejected body"
            );
            Err(AppError::Invalid(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
