//! Rule sets: ordered `(predicate, message)` pairs evaluated eagerly
//!
//! A [`RuleSet`] is declared once per record type with a small builder:
//!
//! ```rust,ignore
//! let rules = RuleSet::new("supplier")
//!     .field("name", |s: &SupplierDto| s.name.as_str())
//!     .must(validators::not_blank(), NAME_REQUIRED)
//!     .must(validators::max_chars(100), NAME_TOO_LONG)
//!     .field("created_at", |s: &SupplierDto| &s.created_at)
//!     .must_at(validators::not_in_future(), CREATED_AT_FUTURE)
//!     .build();
//! ```
//!
//! Evaluation never stops at the first failure: every rule runs and every
//! failing message is reported, in declaration order.

use super::context::ValidationContext;
use crate::config::Locale;
use crate::core::error::{FieldValidationError, ValidationError};
use chrono::{DateTime, Utc};
use std::fmt;

/// A failure message available in every supported locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub pt_br: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, pt_br: &'static str) -> Self {
        Self { en, pt_br }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::PtBr => self.pt_br,
        }
    }
}

type Check<T> = Box<dyn Fn(&T, &ValidationContext) -> bool + Send + Sync>;

/// A single predicate over a record plus the message reported when it fails
pub struct Rule<T> {
    field: &'static str,
    message: Localized,
    check: Check<T>,
}

impl<T> Rule<T> {
    pub fn new<F>(field: &'static str, message: Localized, check: F) -> Self
    where
        F: Fn(&T, &ValidationContext) -> bool + Send + Sync + 'static,
    {
        Self {
            field,
            message,
            check: Box::new(check),
        }
    }

    /// Field the rule is attached to
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> Localized {
        self.message
    }

    /// Whether the record satisfies this rule
    pub fn passes(&self, record: &T, ctx: &ValidationContext) -> bool {
        (self.check)(record, ctx)
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("message", &self.message.en)
            .finish()
    }
}

/// Ordered rules for one record type
pub struct RuleSet<T> {
    record: &'static str,
    rules: Vec<Rule<T>>,
}

impl<T: 'static> RuleSet<T> {
    /// Create an empty rule set for the named record type
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            rules: Vec::new(),
        }
    }

    /// Start declaring rules for a field
    pub fn field<V: ?Sized + 'static>(
        self,
        name: &'static str,
        accessor: fn(&T) -> &V,
    ) -> FieldRules<T, V> {
        FieldRules {
            set: self,
            name,
            accessor,
        }
    }

    /// Add a record-level rule that may look at several fields
    pub fn rule<F>(mut self, field: &'static str, message: Localized, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.rules
            .push(Rule::new(field, message, move |record: &T, _: &ValidationContext| {
                check(record)
            }));
        self
    }

    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Field names in the order they were first declared
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            if !fields.contains(&rule.field) {
                fields.push(rule.field);
            }
        }
        fields
    }

    /// Every failing rule, in declaration order
    pub fn failures(&self, record: &T, ctx: &ValidationContext) -> Vec<FieldValidationError> {
        self.rules
            .iter()
            .filter(|rule| !rule.passes(record, ctx))
            .map(|rule| FieldValidationError {
                field: rule.field.to_string(),
                message: rule.message.get(ctx.locale()).to_string(),
            })
            .collect()
    }

    /// Run all rules and aggregate the failures into a single error
    pub fn evaluate(&self, record: &T, ctx: &ValidationContext) -> Result<(), ValidationError> {
        let failures = self.failures(record, ctx);
        if failures.is_empty() {
            tracing::trace!(record = self.record, rules = self.rules.len(), "record is valid");
            return Ok(());
        }

        let message = failures
            .iter()
            .map(|failure| failure.message.as_str())
            .collect::<Vec<_>>()
            .join(ctx.connective());

        tracing::debug!(
            record = self.record,
            failures = failures.len(),
            "record rejected by validation"
        );

        Err(ValidationError::ValidationFailed {
            record: self.record,
            message,
            failures,
        })
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("record", &self.record)
            .field("rules", &self.rules)
            .finish()
    }
}

/// Builder for the rules of a single field
pub struct FieldRules<T, V: ?Sized> {
    set: RuleSet<T>,
    name: &'static str,
    accessor: fn(&T) -> &V,
}

impl<T: 'static, V: ?Sized + 'static> FieldRules<T, V> {
    /// Predicate over the field value alone
    pub fn must<P>(mut self, predicate: P, message: Localized) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let accessor = self.accessor;
        self.set.rules.push(Rule::new(
            self.name,
            message,
            move |record: &T, _: &ValidationContext| predicate(accessor(record)),
        ));
        self
    }

    /// Predicate over the field value and the context's current time
    pub fn must_at<P>(mut self, predicate: P, message: Localized) -> Self
    where
        P: Fn(&V, DateTime<Utc>) -> bool + Send + Sync + 'static,
    {
        let accessor = self.accessor;
        self.set.rules.push(Rule::new(
            self.name,
            message,
            move |record: &T, ctx: &ValidationContext| {
                predicate(accessor(record), ctx.current_time())
            },
        ));
        self
    }

    /// Predicate over the field value and the whole record
    pub fn must_with<P>(mut self, predicate: P, message: Localized) -> Self
    where
        P: Fn(&V, &T) -> bool + Send + Sync + 'static,
    {
        let accessor = self.accessor;
        self.set.rules.push(Rule::new(
            self.name,
            message,
            move |record: &T, _: &ValidationContext| predicate(accessor(record), record),
        ));
        self
    }

    /// Move on to the next field
    pub fn field<W: ?Sized + 'static>(
        self,
        name: &'static str,
        accessor: fn(&T) -> &W,
    ) -> FieldRules<T, W> {
        self.set.field(name, accessor)
    }

    /// Finish the field and add a record-level rule
    pub fn rule<F>(self, field: &'static str, message: Localized, check: F) -> RuleSet<T>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.set.rule(field, message, check)
    }

    pub fn build(self) -> RuleSet<T> {
        self.set
    }
}
