// src/presentation/http/middleware/pipeline.rs
use crate::domain::errors::AppResult;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// One request-transforming step. Returns the (possibly modified) request to
/// continue, or an error to stop the chain.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, req: Request) -> AppResult<Request>;
}

/// Stages run in insertion order ahead of the handler.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Arc<Vec<Box<dyn Stage>>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            stages: Arc::new(stages),
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn process(&self, req: Request) -> AppResult<Request> {
        self.stages.iter().try_fold(req, |req, stage| stage.apply(req))
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Usage: `axum::middleware::from_fn_with_state(pipeline, run_pipeline)`
pub async fn run_pipeline(State(pipeline): State<Pipeline>, req: Request, next: Next) -> Response {
    match pipeline.process(req) {
        Ok(req) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}
