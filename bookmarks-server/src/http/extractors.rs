//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::Value;

use super::error::ApiError;
use crate::models::Payload;

/// Extract a bookmark id from the path.
///
/// Anything that is not an integer cannot name a stored bookmark, so it is
/// answered like any other unknown id.
pub struct BookmarkId(pub i64);

impl<S> FromRequestParts<S> for BookmarkId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ApiError::NotFound)
    }
}

/// Extract the request body as an untyped JSON object.
///
/// An empty body is an empty object. Content-Type is not enforced.
pub struct JsonPayload(pub Payload);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Payload::new()));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            _ => Err(ApiError::BadRequest {
                message: "Request body must be a JSON object".to_string(),
            }),
        }
    }
}
