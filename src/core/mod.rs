//! Core module containing the error types and the validation engine

pub mod error;
pub mod validation;

pub use error::{
    ConfigError, DtoError, ErrorResponse, FieldValidationError, RequestError, ValidationError,
};
pub use validation::{Localized, RuleSet, Validatable, Validated, ValidationContext};
