// src/presentation/http/middleware/errors.rs
use crate::presentation::http::error::{HttpError, Thrown, render_failure, render_unmarked};
use axum::{
    body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Unmarked failure bodies are read up to this size for logging.
const UNMARKED_BODY_LIMIT: usize = 16 * 1024;

/// Outermost boundary. Successful responses pass through untouched. A
/// response marked with a caught failure is classified and replaced by the
/// error envelope. Any other 4xx or 5xx response, e.g. an extractor
/// rejection, is replaced by an envelope too, so clients never see a raw
/// framework message.
///
/// Usage: `router.layer(axum::middleware::from_fn(error_boundary))`
pub async fn error_boundary(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    if let Some(thrown) = response.extensions_mut().remove::<Thrown>() {
        return render_failure(thrown.error());
    }

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let raw = body::to_bytes(response.into_body(), UNMARKED_BODY_LIMIT)
        .await
        .unwrap_or_default();
    render_unmarked(status, &String::from_utf8_lossy(&raw))
}

/// Turns a handler panic into an unclassified failure for
/// [`error_boundary`]. Used with `CatchPanicLayer::custom`.
pub fn panic_to_failure(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| "non-string panic payload".to_owned());

    HttpError::from(anyhow::anyhow!("handler panicked: {message}")).into_response()
}
