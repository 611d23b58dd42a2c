// src/presentation/http/error.rs
use crate::domain::errors::{AppError, ErrorKind, InternalCode, ValidationCode};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Anything a handler can fail with. Known failures are [`AppError`]s; every
/// other error is carried opaquely and reported as `INNO_INTERNAL`.
///
/// Rendering is deferred: the response produced here only marks the failure,
/// and the error boundary middleware writes the envelope.
#[derive(Debug)]
pub struct HttpError(anyhow::Error);

impl<E> From<E> for HttpError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

impl HttpError {
    pub fn app_error(&self) -> Option<&AppError> {
        self.0.chain().find_map(|cause| cause.downcast_ref::<AppError>())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(Thrown(Arc::new(self)));
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        HttpError::from(self).into_response()
    }
}

/// Response extension marking a caught failure.
#[derive(Debug, Clone)]
pub struct Thrown(Arc<HttpError>);

impl Thrown {
    pub fn error(&self) -> &HttpError {
        &self.0
    }
}

/// Uniform failure body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            error: err.wire_code(),
            details: err.public_details(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: format!(
                "{}{}",
                ErrorKind::Internal.prefix(),
                InternalCode::Internal.as_str()
            ),
            details: None,
        }
    }
}

/// Classify a caught failure and build the client-facing response. Details
/// of unclassified failures and of internal errors are logged, never sent.
pub fn render_failure(failure: &HttpError) -> Response {
    let (status, envelope) = match failure.app_error() {
        Some(err) => {
            match err {
                AppError::Internal { inner_details, .. } => {
                    error!(code = %err.wire_code(), details = %inner_details, "internal error");
                }
                AppError::Validation { .. } | AppError::Auth { .. } => {
                    debug!(code = %err.wire_code(), "request rejected");
                }
            }
            (err.http_status(), ErrorEnvelope::from_app_error(err))
        }
        None => {
            error!(error = ?failure.0, "unclassified failure");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorEnvelope::internal())
        }
    };

    (status, Json(envelope)).into_response()
}

/// Envelope for an error response produced below the boundary without a
/// [`Thrown`] marker, such as an axum extractor rejection.
/// Server errors become `INNO_INTERNAL`; client errors keep their status and
/// become `VALIDATION_BAD_REQUEST`. The original body is logged only.
pub fn render_unmarked(status: StatusCode, body: &str) -> Response {
    if status.is_server_error() {
        return render_failure(&HttpError::from(anyhow::anyhow!(
            "unmarked {status} response: {body}"
        )));
    }

    debug!(%status, body, "framework rejection");
    let envelope = ErrorEnvelope::from_app_error(&AppError::rejected(ValidationCode::BadRequest));
    (status, Json(envelope)).into_response()
}
