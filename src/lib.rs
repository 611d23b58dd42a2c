//! Request validation, a stable error taxonomy, and the Axum middleware that
//! turns any handler failure into a `{error, details}` envelope.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
