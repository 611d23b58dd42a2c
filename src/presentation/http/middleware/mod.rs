// src/presentation/http/middleware/mod.rs
pub mod auth;
pub mod errors;
pub mod pipeline;

pub use auth::AuthStage;
pub use errors::{error_boundary, panic_to_failure};
pub use pipeline::{Pipeline, Stage, run_pipeline};
