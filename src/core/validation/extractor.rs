//! Validation entry point for records and the matching axum extractor
//!
//! `Validated<T>` decodes a JSON body into `T` and runs its rule set before
//! the handler sees it. Messages follow the [`ValidationSettings`] found in
//! the router state, or the defaults when the router has no state.

use super::context::ValidationContext;
use super::rules::RuleSet;
use crate::config::ValidationSettings;
use crate::core::error::{DtoError, RequestError, ValidationError};
use axum::{
    Json,
    extract::{FromRef, FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// Trait for records that carry a rule set
pub trait Validatable: Sized + 'static {
    /// The record's rules, built once per process
    fn rules() -> &'static RuleSet<Self>;

    /// Validate against the wall clock with default settings
    fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&ValidationContext::now())
    }

    /// Validate with an explicit instant and message settings
    fn validate_with(&self, ctx: &ValidationContext) -> Result<(), ValidationError> {
        Self::rules().evaluate(self, ctx)
    }
}

/// Axum extractor that decodes and validates a record
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_supplier(
///     Validated(supplier): Validated<SupplierDto>,
/// ) -> StatusCode {
///     // supplier already passed every rule
///     StatusCode::CREATED
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Get the inner record
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Stateless routers validate with the default settings
impl FromRef<()> for ValidationSettings {
    fn from_ref(_: &()) -> Self {
        ValidationSettings::default()
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    ValidationSettings: FromRef<S>,
    T: Validatable + DeserializeOwned + Send,
{
    type Rejection = DtoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::warn!(
                record = T::rules().record(),
                status = %e.status(),
                error = %e,
                "payload could not be decoded"
            );
            reject_payload(e)
        })?;

        let ctx = ValidationContext::from_settings(&ValidationSettings::from_ref(state));
        payload.validate_with(&ctx).inspect_err(|e| {
            tracing::warn!(
                record = T::rules().record(),
                failures = e.failures().len(),
                "payload rejected"
            );
        })?;

        Ok(Validated(payload))
    }
}

/// Decode errors become `INVALID_JSON`; body-level refusals keep their status
fn reject_payload(rejection: JsonRejection) -> DtoError {
    let message = rejection.body_text();
    match rejection.status() {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ValidationError::InvalidJson { message }.into()
        }
        StatusCode::UNSUPPORTED_MEDIA_TYPE => RequestError::UnsupportedMediaType { message }.into(),
        StatusCode::PAYLOAD_TOO_LARGE => RequestError::PayloadTooLarge { message }.into(),
        status => RequestError::InvalidBody { status, message }.into(),
    }
}
