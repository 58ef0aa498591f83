//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::{AppError, FieldErrors};

/// Validated JSON extractor that automatically validates requests.
///
/// Failures become `AppError::Form` with messages keyed by field name.
///
/// ```rust,ignore
/// async fn send(ValidatedJson(payload): ValidatedJson<SendMessageRequest>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        validate(&value)?;
        Ok(ValidatedJson(value))
    }
}

/// Run the derived validations and convert failures to a form error.
pub fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|e| AppError::Form(field_errors(&e)))
}

/// Flatten validation errors into field -> messages.
///
/// Nested structs are flattened into their parent, matching
/// `#[serde(flatten)]` payloads.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    collect(errors, &mut fields);
    fields
}

fn collect(errors: &ValidationErrors, fields: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(errs) => {
                let messages = fields.entry(field.to_string()).or_default();
                messages.extend(errs.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Valor no válido".to_string())
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, fields),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect(inner, fields);
                }
            }
        }
    }
}
