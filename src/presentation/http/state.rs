// src/presentation/http/state.rs
use crate::infrastructure::db::PgService;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct HttpState {
    pub db: Option<Arc<PgService>>,
}
