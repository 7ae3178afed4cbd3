//! # Trade DTOs
//!
//! Supplier and salesperson data-transfer objects with declarative field
//! validation.
//!
//! ## Features
//!
//! - **Ordered Rule Sets**: Each record declares its rules once, field by field
//! - **Aggregated Errors**: Every failing rule is reported in a single error
//! - **Time-Relative Rules**: "Not in the future" and minimum-age checks read a pinnable clock
//! - **Cross-Field Rules**: e.g. hire date on or after birth date
//! - **Localized Messages**: English and Brazilian Portuguese, configurable connective
//! - **Axum Integration**: `Validated<T>` rejects invalid JSON bodies with HTTP 400, in the locale held by the router state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trade_dtos::prelude::*;
//!
//! let supplier = SupplierDto::new(
//!     "Acme Industrial",
//!     "12345678000195",
//!     "11987654321",
//!     "contact@acme.com",
//!     "Rua das Flores, 100",
//!     Utc::now(),
//! );
//!
//! supplier.validate()?;
//! ```

pub mod config;
pub mod core;
pub mod dtos;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Validation ===
    pub use crate::core::validation::{
        FieldRules, Localized, Rule, RuleSet, Validatable, Validated, ValidationContext,
        validators,
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, DtoError, ErrorResponse, FieldValidationError, RequestError, ValidationError,
    };

    // === Records ===
    pub use crate::dtos::{SalespersonDto, SupplierDto};

    // === Config ===
    pub use crate::config::{Locale, ValidationSettings};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
