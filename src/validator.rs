use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// JSON extractor that runs `validator` rules after deserialization.
///
/// A body that does not deserialize into the DTO (missing fields, wrong
/// types, broken JSON) is a 400; a body that deserializes but breaks a
/// field rule is a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

/// Flattens per-field rule failures into one message, using each rule's
/// own message where it has one.
fn rule_failures(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    match rejection {
        // serde's data errors name the offending field themselves.
        JsonRejection::JsonDataError(err) => AppError::bad_request(anyhow!(err.body_text())),
        JsonRejection::JsonSyntaxError(_) => {
            AppError::bad_request(anyhow!("request body is not valid JSON"))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request(anyhow!("expected 'Content-Type: application/json'"))
        }
        _ => AppError::bad_request(anyhow!("invalid request body")),
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!(rule_failures(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
