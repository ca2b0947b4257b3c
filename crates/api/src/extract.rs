//! Request extraction with the error shapes clients expect.
//!
//! axum's own extractors reject with plain-text bodies; these wrappers route
//! every rejection through [`AppError`] so clients always get `{error, code}`.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header. An empty
/// (or whitespace-only) body is rejected with 415 and malformed JSON with 400,
/// both through [`AppError`] so the response carries the usual error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;
        parse_body(&bytes).map(JsonBody)
    }
}

/// Path parameter extractor.
///
/// Same as `axum::extract::Path`, but an unparsable segment (e.g.
/// `/projects/abc`) is a JSON 400 instead of a plain-text one.
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| rejection_error(e.status(), e.body_text()))?;
        Ok(PathParam(value))
    }
}

/// Map an axum rejection onto [`AppError`], keeping its status class.
fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else if status.is_server_error() {
        AppError::InternalError(message)
    } else {
        AppError::BadRequest(message)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::UnsupportedMediaType(
            "Your json request is empty".into(),
        ));
    }
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))
}
