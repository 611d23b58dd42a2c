// src/presentation/http/middleware/auth.rs
use super::pipeline::Stage;
use crate::domain::errors::{AppError, AppResult, AuthCode};
use crate::infrastructure::security::jwt::JwtVerifier;
use crate::presentation::http::extractors::Identity;
use axum::{extract::Request, http::header::AUTHORIZATION};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use regex::Regex;

/// Bearer-token check. Paths matching `public_path` pass untouched; on other
/// paths the verified claims are attached as [`Identity`].
#[derive(Debug, Clone)]
pub struct AuthStage {
    verifier: JwtVerifier,
    public_path: Option<Regex>,
}

impl AuthStage {
    pub const fn new(verifier: JwtVerifier, public_path: Option<Regex>) -> Self {
        Self {
            verifier,
            public_path,
        }
    }

    fn is_public(&self, path: &str) -> bool {
        self.public_path
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(path))
    }
}

impl Stage for AuthStage {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn apply(&self, mut req: Request) -> AppResult<Request> {
        if self.is_public(req.uri().path()) {
            return Ok(req);
        }

        let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
            let code = if req.headers().contains_key(AUTHORIZATION) {
                AuthCode::TokenIsInvalid
            } else {
                AuthCode::TokenMissing
            };
            tracing::debug!(path = req.uri().path(), code = code.as_str(), "no usable bearer token");
            return Err(AppError::auth(code));
        };

        let claims = self.verifier.verify(header.token())?;
        req.extensions_mut().insert(Identity { claims });
        Ok(req)
    }
}
