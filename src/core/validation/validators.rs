//! Reusable field predicates
//!
//! Each constructor returns a closure that answers "does this value pass?".
//! Rule sets pair them with a failure message, see [`super::rules`].

use chrono::{DateTime, Months, Utc};
use regex::Regex;
use validator::ValidateEmail;

type Timestamp = Option<DateTime<Utc>>;

/// Length a tax id must have
pub const TAX_ID_LENGTH: usize = 14;

/// Validator: string is not empty and not only whitespace
pub fn not_blank() -> impl Fn(&str) -> bool + Send + Sync + Clone {
    |value: &str| !value.trim().is_empty()
}

/// Validator: optional value is present
pub fn present<T>() -> impl Fn(&Option<T>) -> bool + Send + Sync + Clone {
    |value: &Option<T>| value.is_some()
}

/// Validator: string has at most `max` characters
pub fn max_chars(max: usize) -> impl Fn(&str) -> bool + Send + Sync + Clone {
    move |value: &str| value.chars().count() <= max
}

/// Validator: string has exactly `len` characters
pub fn exact_chars(len: usize) -> impl Fn(&str) -> bool + Send + Sync + Clone {
    move |value: &str| value.chars().count() == len
}

/// Validator: string length is within `min..=max` characters
pub fn chars_between(min: usize, max: usize) -> impl Fn(&str) -> bool + Send + Sync + Clone {
    move |value: &str| (min..=max).contains(&value.chars().count())
}

/// Validator: string matches the regular expression
pub fn matches(pattern: &'static Regex) -> impl Fn(&str) -> bool + Send + Sync + Clone {
    move |value: &str| pattern.is_match(value)
}

/// Validator: string is a syntactically valid email address
pub fn email() -> impl Fn(&str) -> bool + Send + Sync + Clone {
    |value: &str| value.validate_email()
}

/// Validator: number lies within `min..=max`
pub fn inclusive_between<N>(min: N, max: N) -> impl Fn(&N) -> bool + Send + Sync + Clone
where
    N: PartialOrd + Clone + Send + Sync,
{
    move |value: &N| *value >= min && *value <= max
}

/// Validator: number is strictly greater than `bound`
pub fn greater_than<N>(bound: N) -> impl Fn(&N) -> bool + Send + Sync + Clone
where
    N: PartialOrd + Clone + Send + Sync,
{
    move |value: &N| *value > bound
}

/// Validator: timestamp is not after `now` (absent passes)
pub fn not_in_future() -> impl Fn(&Timestamp, DateTime<Utc>) -> bool + Send + Sync + Clone {
    |value: &Timestamp, now: DateTime<Utc>| value.is_none_or(|at| at <= now)
}

/// Validator: at least `years` calendar years have elapsed since the
/// timestamp (absent passes)
///
/// On Feb 29 the cutoff falls back to Feb 28 of the target year.
pub fn at_least_years_ago(years: u32) -> impl Fn(&Timestamp, DateTime<Utc>) -> bool + Send + Sync + Clone {
    move |value: &Timestamp, now: DateTime<Utc>| {
        let Some(at) = *value else {
            return true;
        };
        match now.checked_sub_months(Months::new(years.saturating_mul(12))) {
            Some(cutoff) => at <= cutoff,
            None => false,
        }
    }
}

/// Validator: timestamp is on or after another timestamp of the same record
/// (passes when either side is absent)
pub fn on_or_after<T>(
    other: fn(&T) -> &Timestamp,
) -> impl Fn(&Timestamp, &T) -> bool + Send + Sync + Clone {
    move |value: &Timestamp, record: &T| match (*value, *other(record)) {
        (Some(at), Some(reference)) => at >= reference,
        _ => true,
    }
}

/// Validator: tax id has the expected length and only digits
///
/// No check-digit algorithm is applied.
pub fn tax_id() -> impl Fn(&str) -> bool + Send + Sync + Clone {
    |value: &str| is_well_formed_tax_id(value)
}

pub fn is_well_formed_tax_id(value: &str) -> bool {
    value.chars().count() == TAX_ID_LENGTH && value.chars().all(|c| c.is_ascii_digit())
}
