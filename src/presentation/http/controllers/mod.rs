// src/presentation/http/controllers/mod.rs
use crate::application::validation::{ItemValidator, RuleSet, SanitizedData, Validator};
use crate::domain::errors::AppResult;
use crate::presentation::http::extractors::RequestContext;

pub mod system;

/// Base capability for route handlers. Handlers declare their rules and get
/// back sanitised data; a failure is the validation error, returned as is.
///
/// ```ignore
/// let data = self.validate(&ctx, |v| vec![v.is_email("email"), v.is_int("age")])?;
/// ```
pub trait Controller {
    fn validate<F>(&self, ctx: &RequestContext, rules: F) -> AppResult<SanitizedData>
    where
        F: FnOnce(&Validator) -> RuleSet,
    {
        ItemValidator::new(ctx.inputs()).validate(rules)
    }
}
