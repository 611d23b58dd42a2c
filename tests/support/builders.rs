// tests/support/builders.rs
use axum::extract::State;
use axum::{Extension, Json, Router, routing::get, routing::post};
use inno_core::config::AppConfig;
use inno_core::presentation::http::{
    app::build_app,
    controllers::Controller,
    error::HttpResult,
    extractors::{MaybeIdentity, RequestContext},
    response::Success,
    routes::build_router,
    state::HttpState,
};
use jsonwebtoken::{EncodingKey, Header, encode};
use once_cell::sync::Lazy;
use serde_json::{Value, json};
use std::sync::Arc;

pub const JWT_SECRET: &str = "test-secret";
pub const JWT_PUBLIC_PATH: &str = r"^/public";

pub const PUBLIC_RESOURCE: &str = "/public/test";
pub const PUBLIC_RESOURCE_WITH_ERROR: &str = "/public/errors/common";
pub const PUBLIC_RESOURCE_WITH_PANIC: &str = "/public/errors/panic";
pub const PUBLIC_RESOURCE_WITH_VALIDATION: &str = "/public/errors/validation";
pub const PROTECTED_RESOURCE: &str = "/test";
pub const WHOAMI_RESOURCE: &str = "/whoami";
pub const PUBLIC_STATE_RESOURCE: &str = "/public/state";
pub const PUBLIC_JSON_ONLY_RESOURCE: &str = "/public/json-only";
pub const PUBLIC_UNWIRED_RESOURCE: &str = "/public/unwired";

pub static JWT_CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    AppConfig::new(9890)
        .with_jwt_secret(JWT_SECRET)
        .with_jwt_public_path(JWT_PUBLIC_PATH)
        .expect("valid public path pattern")
});

pub static COMMON_CONFIG: Lazy<AppConfig> = Lazy::new(|| AppConfig::new(9891));

#[derive(Debug, Default)]
pub struct TestController;

impl Controller for TestController {}

async fn public_resource() -> Success<i32> {
    Success::new(1)
}

async fn protected_resource() -> Success<i32> {
    Success::new(2)
}

async fn public_resource_with_error() -> HttpResult<Success<i32>> {
    Err(anyhow::anyhow!("Test error").into())
}

async fn public_resource_with_panic() -> Success<i32> {
    panic!("Test panic with secret connection string")
}

async fn public_resource_with_validation(
    State(controller): State<Arc<TestController>>,
    ctx: RequestContext,
) -> HttpResult<Success<Value>> {
    let data = controller.validate(&ctx, |validator| {
        vec![
            validator.is_email("testField"),
            validator.is_int("testQueryField"),
        ]
    })?;

    Ok(Success::new(json!({
        "testField": data["testField"],
        "testQueryField": data["testQueryField"],
    })))
}

async fn public_user_by_id(
    State(controller): State<Arc<TestController>>,
    ctx: RequestContext,
) -> HttpResult<Success<Value>> {
    let data = controller.validate(&ctx, |validator| vec![validator.is_int("id")])?;
    Ok(Success::new(Value::Object(data)))
}

async fn whoami(MaybeIdentity(identity): MaybeIdentity) -> Success<Value> {
    Success::new(identity.map_or(Value::Null, |id| id.claims))
}

async fn public_state(Extension(state): Extension<HttpState>) -> Success<Value> {
    Success::new(json!({ "database": state.db.is_some() }))
}

async fn public_json_only(Json(body): Json<Value>) -> Success<Value> {
    Success::new(body)
}

/// Never registered by the app, so extraction always fails.
#[derive(Clone)]
struct Unwired;

async fn public_unwired(Extension(_): Extension<Unwired>) -> Success<i32> {
    Success::new(3)
}

pub fn test_routes() -> Router {
    let controller = Arc::new(TestController);
    let service_routes = Router::new()
        .route(PUBLIC_RESOURCE, post(public_resource))
        .route(PROTECTED_RESOURCE, post(protected_resource))
        .route(PUBLIC_RESOURCE_WITH_ERROR, get(public_resource_with_error))
        .route(PUBLIC_RESOURCE_WITH_PANIC, get(public_resource_with_panic))
        .route(
            PUBLIC_RESOURCE_WITH_VALIDATION,
            post(public_resource_with_validation),
        )
        .route("/public/users/{id}", get(public_user_by_id))
        .route(WHOAMI_RESOURCE, get(whoami))
        .route(PUBLIC_STATE_RESOURCE, get(public_state))
        .route(PUBLIC_JSON_ONLY_RESOURCE, post(public_json_only))
        .route(PUBLIC_UNWIRED_RESOURCE, get(public_unwired))
        .with_state(controller);

    build_router().merge(service_routes)
}

pub fn make_test_router(config: &AppConfig) -> Router {
    build_app(config, HttpState::default(), test_routes())
}

pub fn make_router_with_state(state: HttpState) -> Router {
    build_app(&COMMON_CONFIG, state, test_routes())
}

pub fn make_jwt_router() -> Router {
    make_test_router(&JWT_CONFIG)
}

pub fn make_common_router() -> Router {
    make_test_router(&COMMON_CONFIG)
}

pub fn sign_token(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("sign token")
}
