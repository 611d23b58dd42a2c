// src/presentation/http/app.rs
use crate::config::AppConfig;
use crate::infrastructure::security::jwt::JwtVerifier;
use crate::presentation::http::middleware::{
    AuthStage, Pipeline, Stage, error_boundary, panic_to_failure, run_pipeline,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    middleware::{from_fn, from_fn_with_state},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Request stages implied by `config`. No JWT secret means no auth stage.
pub fn build_pipeline(config: &AppConfig) -> Pipeline {
    let mut stages: Vec<Box<dyn Stage>> = Vec::new();

    match config.jwt_secret() {
        Some(secret) => {
            stages.push(Box::new(AuthStage::new(
                JwtVerifier::new(secret),
                config.jwt_public_path().cloned(),
            )));
        }
        None => tracing::info!("no JWT secret configured, all routes are public"),
    }

    Pipeline::new(stages)
}

/// Wrap `routes` in the request stack, outermost first: tracing, the error
/// boundary, the panic catcher, the stage pipeline, then `state` as a request
/// extension. `routes` must already contain every merged service route.
pub fn build_app(config: &AppConfig, state: HttpState, routes: Router) -> Router {
    let pipeline = build_pipeline(config);
    tracing::debug!(?pipeline, "request pipeline assembled");

    routes
        .layer(Extension(state))
        .layer(from_fn_with_state(pipeline, run_pipeline))
        .layer(CatchPanicLayer::custom(panic_to_failure))
        .layer(from_fn(error_boundary))
        .layer(TraceLayer::new_for_http())
}
