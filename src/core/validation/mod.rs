//! Validation system
//!
//! Records declare an ordered [`RuleSet`] built from reusable predicates in
//! [`validators`]. Validation evaluates every rule and reports all failures
//! as one [`ValidationError`](crate::core::error::ValidationError).

pub mod context;
pub mod extractor;
pub mod rules;
pub mod validators;

pub use context::ValidationContext;
pub use extractor::{Validatable, Validated};
pub use rules::{FieldRules, Localized, Rule, RuleSet};
