// src/domain/errors.rs
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::{borrow::Cow, fmt};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Subtype tag of an [`AppError`]. Carries the wire prefix and default status
/// so callers never need an error instance to discover them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Auth,
    Internal,
}

impl ErrorKind {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_",
            Self::Auth => "AUTH_",
            Self::Internal => "INNO_",
        }
    }

    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Auth => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCode {
    NoEmail,
    NoInt,
    NoBool,
    NoValue,
    BadLength,
    MalformedBody,
    MalformedPath,
    /// Request refused by the HTTP layer before any handler validation ran.
    BadRequest,
}

impl ValidationCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoEmail => "NO_EMAIL",
            Self::NoInt => "NO_INT",
            Self::NoBool => "NO_BOOL",
            Self::NoValue => "NO_VALUE",
            Self::BadLength => "BAD_LENGTH",
            Self::MalformedBody => "MALFORMED_BODY",
            Self::MalformedPath => "MALFORMED_PATH",
            Self::BadRequest => "BAD_REQUEST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthCode {
    TokenIsInvalid,
    TokenMissing,
}

impl AuthCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TokenIsInvalid => "TOKEN_IS_INVALID",
            Self::TokenMissing => "TOKEN_MISSING",
        }
    }
}

pub const NO_ROW_PREFIX: &str = "DB_NO_SUCH_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalCode {
    Internal,
    DbQuery,
    /// A row the caller required was not found. Holds the upper-case entity
    /// name, rendered as `DB_NO_SUCH_<ENTITY>`.
    NoSuch(&'static str),
}

impl InternalCode {
    pub const fn no_such(entity: &'static str) -> Self {
        Self::NoSuch(entity)
    }

    pub fn as_str(self) -> Cow<'static, str> {
        match self {
            Self::Internal => Cow::Borrowed("INTERNAL"),
            Self::DbQuery => Cow::Borrowed("DB_QUERY"),
            Self::NoSuch(entity) => Cow::Owned(format!("{NO_ROW_PREFIX}{entity}")),
        }
    }
}

/// The first field that failed validation, as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFailure {
    pub invalid_field: String,
    pub invalid_value: Value,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            invalid_field: field.into(),
            invalid_value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("validation failed: {}", .code.as_str())]
    Validation {
        code: ValidationCode,
        failure: Option<FieldFailure>,
    },

    #[error("authentication failed: {}", .code.as_str())]
    Auth { code: AuthCode },

    #[error("internal failure: {}", .code.as_str())]
    Internal {
        code: InternalCode,
        inner_details: Value,
    },
}

impl AppError {
    pub fn validation(code: ValidationCode, failure: FieldFailure) -> Self {
        Self::Validation {
            code,
            failure: Some(failure),
        }
    }

    /// Validation failure not tied to a single field.
    pub const fn rejected(code: ValidationCode) -> Self {
        Self::Validation {
            code,
            failure: None,
        }
    }

    pub const fn auth(code: AuthCode) -> Self {
        Self::Auth { code }
    }

    pub fn internal(code: InternalCode, inner_details: impl Into<Value>) -> Self {
        Self::Internal {
            code,
            inner_details: inner_details.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn code(&self) -> Cow<'static, str> {
        match self {
            Self::Validation { code, .. } => Cow::Borrowed(code.as_str()),
            Self::Auth { code } => Cow::Borrowed(code.as_str()),
            Self::Internal { code, .. } => code.as_str(),
        }
    }

    /// Stable identifier sent to clients, e.g. `VALIDATION_NO_EMAIL`.
    pub fn wire_code(&self) -> String {
        format!("{}{}", self.kind().prefix(), self.code())
    }

    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::Internal {
                code: InternalCode::NoSuch(_),
                ..
            } => StatusCode::NOT_FOUND,
            other => other.kind().default_status(),
        }
    }

    /// Details safe to serialise into a response body. Internal details stay
    /// server-side.
    pub fn public_details(&self) -> Option<Value> {
        match self {
            Self::Validation {
                failure: Some(failure),
                ..
            } => serde_json::to_value(failure).ok(),
            Self::Validation { failure: None, .. } | Self::Auth { .. } | Self::Internal { .. } => {
                None
            }
        }
    }

    pub const fn inner_details(&self) -> Option<&Value> {
        match self {
            Self::Internal { inner_details, .. } => Some(inner_details),
            Self::Validation { .. } | Self::Auth { .. } => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Auth => "auth",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}
