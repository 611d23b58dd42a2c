// src/application/validation/field.rs
use crate::domain::errors::{AppError, FieldFailure, ValidationCode};
use regex::Regex;
use serde_json::Value;
use std::{fmt, sync::OnceLock};

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
    })
}

type CheckFn = dyn Fn(Option<&Value>) -> Result<Value, Rejection> + Send + Sync;

/// Why a single value was refused: the code plus the value actually checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub code: ValidationCode,
    pub value: Value,
}

/// One declared check bound to a field name.
pub struct FieldRule {
    field: String,
    check: Box<CheckFn>,
}

impl FieldRule {
    fn new<F>(field: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&Value>) -> Result<Value, Rejection> + Send + Sync + 'static,
    {
        Self {
            field: field.into(),
            check: Box::new(check),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Sanitise and check `raw`, yielding the normalised value or the
    /// validation error naming this field.
    pub fn apply(&self, raw: Option<&Value>) -> Result<Value, AppError> {
        (self.check)(raw).map_err(|rejection| {
            AppError::validation(
                rejection.code,
                FieldFailure::new(self.field.clone(), rejection.value),
            )
        })
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

/// Trimmed text form of a scalar input. Missing values and structured values
/// are refused with what should be reported back.
fn trimmed(raw: Option<&Value>) -> Result<String, Value> {
    match raw {
        Some(Value::String(s)) => Ok(s.trim().to_owned()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        None | Some(Value::Null) => Err(Value::Null),
        Some(other @ (Value::Array(_) | Value::Object(_))) => Err(other.clone()),
    }
}

fn check_text<F>(code: ValidationCode, raw: Option<&Value>, accept: F) -> Result<Value, Rejection>
where
    F: Fn(&str) -> Option<Value>,
{
    let text = trimmed(raw).map_err(|value| Rejection { code, value })?;
    accept(&text).ok_or(Rejection {
        code,
        value: Value::String(text),
    })
}

/// Builds field rules. Handed to rule-set closures; holds no state, the
/// first-failure bookkeeping lives in the item validator's fold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Trimmed e-mail address; case is preserved.
    pub fn is_email(&self, field: impl Into<String>) -> FieldRule {
        FieldRule::new(field, |raw| {
            check_text(ValidationCode::NoEmail, raw, |text| {
                email_pattern()
                    .is_match(text)
                    .then(|| Value::String(text.to_owned()))
            })
        })
    }

    /// Integer parsed from the trimmed text. Floats are refused.
    pub fn is_int(&self, field: impl Into<String>) -> FieldRule {
        FieldRule::new(field, |raw| {
            check_text(ValidationCode::NoInt, raw, |text| {
                text.parse::<i64>().ok().map(Value::from)
            })
        })
    }

    /// `true`/`false`/`1`/`0`, case-insensitive.
    pub fn is_bool(&self, field: impl Into<String>) -> FieldRule {
        FieldRule::new(field, |raw| {
            check_text(ValidationCode::NoBool, raw, |text| {
                if text.eq_ignore_ascii_case("true") || text == "1" {
                    Some(Value::Bool(true))
                } else if text.eq_ignore_ascii_case("false") || text == "0" {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            })
        })
    }

    pub fn is_required(&self, field: impl Into<String>) -> FieldRule {
        FieldRule::new(field, |raw| {
            check_text(ValidationCode::NoValue, raw, |text| {
                (!text.is_empty()).then(|| Value::String(text.to_owned()))
            })
        })
    }

    /// Trimmed string whose length in characters lies within `min..=max`.
    pub fn is_length(&self, field: impl Into<String>, min: usize, max: usize) -> FieldRule {
        FieldRule::new(field, move |raw| {
            check_text(ValidationCode::BadLength, raw, |text| {
                let len = text.chars().count();
                (min..=max)
                    .contains(&len)
                    .then(|| Value::String(text.to_owned()))
            })
        })
    }

    /// Handler-specific check over the trimmed text. `accept` returns the
    /// sanitised value, or `None` to fail with `code`.
    pub fn custom<F>(&self, field: impl Into<String>, code: ValidationCode, accept: F) -> FieldRule
    where
        F: Fn(&str) -> Option<Value> + Send + Sync + 'static,
    {
        FieldRule::new(field, move |raw| check_text(code, raw, &accept))
    }
}
