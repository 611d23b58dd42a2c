// src/application/validation/mod.rs
pub mod field;
pub mod input;
pub mod item;

pub use field::{FieldRule, Rejection, Validator};
pub use input::{InputBag, fields_from_pairs};
pub use item::{ItemValidator, RuleSet, SanitizedData};
