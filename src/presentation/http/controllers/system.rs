// src/presentation/http/controllers/system.rs
use crate::presentation::http::error::HttpResult;
use crate::presentation::http::response::Success;
use crate::presentation::http::state::HttpState;
use axum::Extension;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Liveness probe. When a database is configured it must answer a trivial
/// query, otherwise the probe fails with `INNO_DB_QUERY`.
pub async fn health(Extension(state): Extension<HttpState>) -> HttpResult<Success<StatusResponse>> {
    if let Some(db) = &state.db {
        db.run("SELECT 1", &[]).await?;
    }

    Ok(Success::new(StatusResponse {
        status: "ok".into(),
    }))
}
