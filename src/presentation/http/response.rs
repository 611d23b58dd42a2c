// src/presentation/http/response.rs
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Success body: `{"result": <value>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Success<T> {
    pub result: T,
}

impl<T> Success<T> {
    pub const fn new(result: T) -> Self {
        Self { result }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
