// src/infrastructure/db/mod.rs
mod executor;
mod service;

pub use executor::{QueryExecutor, SqlParam};
pub use service::{DbService, ONE_ROW_WARNING, PgService};
