//! Per-call validation context
//!
//! Time-relative rules ("not in the future", minimum age) read `now` from the
//! context rather than the clock, so a caller can pin the instant.

use crate::config::{Locale, ValidationSettings};
use chrono::{DateTime, Utc};

/// The instant and message settings used by a single validation call
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationContext {
    now: DateTime<Utc>,
    locale: Locale,
    connective: String,
}

impl ValidationContext {
    /// Wall-clock time with default settings
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// A fixed instant with default settings
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::from_settings(&ValidationSettings::default()).with_now(now)
    }

    /// Wall-clock time with the given settings
    pub fn from_settings(settings: &ValidationSettings) -> Self {
        Self {
            now: Utc::now(),
            locale: settings.locale,
            connective: settings.effective_connective().to_string(),
        }
    }

    /// Replace the instant
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Replace the locale, resetting the connective to the locale's own
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.connective = locale.default_connective().to_string();
        self
    }

    pub fn current_time(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn connective(&self) -> &str {
        &self.connective
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::now()
    }
}
