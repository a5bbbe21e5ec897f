use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;

use crate::errors::AppError;

/// Same ceiling the `Json` extractor applies by default.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

const UNREADABLE_BODY: &str = "The request body could not be read.";

/// Upper-cases the `name` field of a user write before the handler sees it.
///
/// Bodies without a string `name`, or that are not JSON at all, are passed on
/// untouched so the handler reports the problem.
pub async fn uppercase_name(request: Request, next: Next) -> Result<Response, AppError> {
    let (mut parts, body) = request.into_parts();
    let bytes = to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|_| AppError::Invalid(UNREADABLE_BODY))?;

    let body = match normalize_name(&bytes) {
        Some(rewritten) => {
            parts.headers.remove(header::CONTENT_LENGTH);
            Body::from(rewritten)
        }
        None => Body::from(bytes),
    };

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Returns the re-encoded body when it carried a string `name`.
pub fn normalize_name(body: &[u8]) -> Option<Vec<u8>> {
    let mut value: Value = serde_json::from_slice(body).ok()?;
    let Value::String(name) = value.get_mut("name")? else {
        return None;
    };
    *name = name.to_uppercase();
    serde_json::to_vec(&value).ok()
}
