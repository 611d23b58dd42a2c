// src/infrastructure/db/service.rs
use super::executor::{QueryExecutor, SqlParam};
use crate::domain::errors::{AppError, AppResult, InternalCode};
use serde_json::json;
use sqlx::PgPool;
use tracing::{error, warn};

pub const ONE_ROW_WARNING: &str = "WARNING_DB_GET_ROW";

/// Row-count policies over a query executor. Driver failures surface as
/// `INNO_DB_QUERY` carrying the query text, never its parameters.
#[derive(Debug, Clone)]
pub struct DbService<E> {
    executor: E,
}

pub type PgService = DbService<PgPool>;

impl<E: QueryExecutor> DbService<E> {
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Execute and discard any rows.
    pub async fn run(&self, query: &str, params: &[SqlParam]) -> AppResult<bool> {
        self.execute(query, params).await?;
        Ok(true)
    }

    pub async fn get_rows(&self, query: &str, params: &[SqlParam]) -> AppResult<Vec<E::Row>> {
        self.execute(query, params).await
    }

    /// First row, or `None` when the query matched nothing. Extra rows are
    /// logged and dropped.
    pub async fn get_row(&self, query: &str, params: &[SqlParam]) -> AppResult<Option<E::Row>> {
        let rows = self.execute(query, params).await?;
        if rows.len() > 1 {
            warn!(rows = rows.len(), query, "{ONE_ROW_WARNING}: expected 1 row");
        }
        Ok(rows.into_iter().next())
    }

    /// Like [`Self::get_row`], but a missing row fails with `code`.
    pub async fn must_get_row(
        &self,
        code: InternalCode,
        query: &str,
        params: &[SqlParam],
    ) -> AppResult<E::Row> {
        self.get_row(query, params)
            .await?
            .ok_or_else(|| AppError::internal(code, json!({})))
    }

    async fn execute(&self, query: &str, params: &[SqlParam]) -> AppResult<Vec<E::Row>> {
        self.executor
            .fetch_all(query, params)
            .await
            .map_err(|err| {
                error!(error = %err, query, "database query failed");
                AppError::internal(InternalCode::DbQuery, query)
            })
    }
}
