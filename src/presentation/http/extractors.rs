// src/presentation/http/extractors.rs
use crate::application::validation::{InputBag, fields_from_pairs};
use crate::domain::errors::{AppError, AppResult, ValidationCode};
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::PathRejection},
    http::{header::CONTENT_TYPE, request::Parts},
};
use bytes::Bytes;
use serde_json::{Map, Value};
use std::convert::Infallible;
use tracing::debug;

/// Verified token claims attached by the auth stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub claims: Value,
}

#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<Identity>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Identity>().cloned()))
    }
}

/// Everything a handler may validate: body fields, query string and path
/// captures of the current request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    inputs: InputBag,
}

impl RequestContext {
    pub const fn new(inputs: InputBag) -> Self {
        Self { inputs }
    }

    pub const fn inputs(&self) -> &InputBag {
        &self.inputs
    }
}

const fn malformed_body() -> AppError {
    AppError::rejected(ValidationCode::MalformedBody)
}

/// Decode a JSON object or url-encoded form. Other media types carry no
/// fields. Media types compare case-insensitively.
fn decode_body(content_type: &str, bytes: &[u8]) -> AppResult<Map<String, Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "application/json" => match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(fields)) => Ok(fields),
            Ok(_) | Err(_) => Err(malformed_body()),
        },
        "application/x-www-form-urlencoded" | "" => {
            serde_urlencoded::from_bytes::<Vec<(String, String)>>(bytes)
                .map(fields_from_pairs)
                .map_err(|_| malformed_body())
        }
        _ => Ok(Map::new()),
    }
}

impl<S: Send + Sync> FromRequest<S> for RequestContext {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = match Path::<Vec<(String, String)>>::from_request_parts(&mut parts, state)
            .await
        {
            Ok(Path(pairs)) => fields_from_pairs(pairs),
            Err(PathRejection::MissingPathParams(_)) => Map::new(),
            Err(rejection) => {
                debug!(%rejection, path = %parts.uri.path(), "undecodable path params");
                return Err(AppError::rejected(ValidationCode::MalformedPath));
            }
        };

        let query = serde_urlencoded::from_str::<Vec<(String, String)>>(
            parts.uri.query().unwrap_or_default(),
        )
        .map(fields_from_pairs)
        .unwrap_or_default();

        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|_| malformed_body())?;
        let body = decode_body(&content_type, &bytes)?;

        Ok(Self::new(
            InputBag::new()
                .with_body(body)
                .with_query(query)
                .with_params(params),
        ))
    }
}
