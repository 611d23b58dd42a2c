// src/application/validation/item.rs
use super::{
    field::{FieldRule, Validator},
    input::InputBag,
};
use crate::domain::errors::AppResult;
use serde_json::{Map, Value};

/// Normalised values keyed by field name, in declaration order.
pub type SanitizedData = Map<String, Value>;

/// Rules in the order they were declared.
pub type RuleSet = Vec<FieldRule>;

/// Runs a declared rule set against one request's inputs.
#[derive(Debug, Clone, Copy)]
pub struct ItemValidator<'a> {
    inputs: &'a InputBag,
}

impl<'a> ItemValidator<'a> {
    pub const fn new(inputs: &'a InputBag) -> Self {
        Self { inputs }
    }

    /// Evaluate every rule left to right. Stops at the first failing field;
    /// rules after it are never run.
    pub fn validate<F>(&self, rules: F) -> AppResult<SanitizedData>
    where
        F: FnOnce(&Validator) -> RuleSet,
    {
        rules(&Validator)
            .iter()
            .try_fold(SanitizedData::new(), |mut data, rule| {
                let value = rule.apply(self.inputs.lookup(rule.field()))?;
                data.insert(rule.field().to_owned(), value);
                Ok(data)
            })
    }
}
