// src/infrastructure/db/executor.rs
use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
    PgPool, Postgres,
    postgres::{PgArguments, PgRow},
    query::Query,
    types::Json,
};

/// Positional query parameter. `None` binds SQL `NULL` declared with the
/// variant's type, so a null aimed at an `int` column is sent as an `int8`.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Bool(Option<bool>),
    Int(Option<i64>),
    Float(Option<f64>),
    Text(Option<String>),
    Json(Option<Value>),
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Bool(Some(value))
    }
}

impl From<Option<bool>> for SqlParam {
    fn from(value: Option<bool>) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(Some(value))
    }
}

impl From<Option<i64>> for SqlParam {
    fn from(value: Option<i64>) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(Some(i64::from(value)))
    }
}

impl From<Option<i32>> for SqlParam {
    fn from(value: Option<i32>) -> Self {
        Self::Int(value.map(i64::from))
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Float(Some(value))
    }
}

impl From<Option<f64>> for SqlParam {
    fn from(value: Option<f64>) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.to_owned()))
    }
}

impl From<Option<&str>> for SqlParam {
    fn from(value: Option<&str>) -> Self {
        Self::Text(value.map(str::to_owned))
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(Some(value))
    }
}

impl From<Option<String>> for SqlParam {
    fn from(value: Option<String>) -> Self {
        Self::Text(value)
    }
}

impl From<Value> for SqlParam {
    fn from(value: Value) -> Self {
        Self::Json(Some(value))
    }
}

impl From<Option<Value>> for SqlParam {
    fn from(value: Option<Value>) -> Self {
        Self::Json(value)
    }
}

/// Opaque query runner. The pool behind it owns connection checkout and any
/// timeout policy.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    type Row: Send;

    async fn fetch_all(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<Vec<Self::Row>, sqlx::Error>;
}

fn bind<'q>(
    query: Query<'q, Postgres, PgArguments>,
    param: &'q SqlParam,
) -> Query<'q, Postgres, PgArguments> {
    match param {
        SqlParam::Bool(v) => query.bind(*v),
        SqlParam::Int(v) => query.bind(*v),
        SqlParam::Float(v) => query.bind(*v),
        SqlParam::Text(v) => query.bind(v.as_deref()),
        SqlParam::Json(v) => query.bind(v.clone().map(Json)),
    }
}

#[async_trait]
impl QueryExecutor for PgPool {
    type Row = PgRow;

    async fn fetch_all(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<Vec<PgRow>, sqlx::Error> {
        params
            .iter()
            .fold(sqlx::query(query), bind)
            .fetch_all(self)
            .await
    }
}
