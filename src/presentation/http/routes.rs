// src/presentation/http/routes.rs
use crate::presentation::http::controllers::system;
use axum::{Router, routing::get};

/// Built-in routes. Service routes are merged into this router before it is
/// handed to [`crate::presentation::http::app::build_app`], which makes the
/// shared [`crate::presentation::http::state::HttpState`] visible to all of
/// them.
pub fn build_router() -> Router {
    Router::new().route("/health", get(system::health))
}
