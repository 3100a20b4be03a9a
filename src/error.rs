//! Error types for Libris server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Application error codes surfaced in JSON error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    BadValue = 3,
    NoSuchData = 4,
    Duplicate = 5,
    CategoryInUse = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Referential conflict: {0}")]
    ReferentialConflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// One failing request field with all of its violation messages
#[derive(Serialize, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Flatten validator output into one entry per field, every message kept.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .map(|(field, violations)| FieldError {
            field: field.to_string(),
            messages: violations
                .iter()
                .map(|v| {
                    v.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| v.code.to_string())
                })
                .collect(),
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) | AppError::ReferentialConflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match &self {
            AppError::NotFound(msg) => (ErrorCode::NoSuchData, msg.clone(), None),
            AppError::Validation(errors) => (
                ErrorCode::BadValue,
                "Validation failed".to_string(),
                Some(field_errors(errors)),
            ),
            AppError::BadRequest(msg) => (ErrorCode::BadValue, msg.clone(), None),
            AppError::Conflict(msg) => (ErrorCode::Duplicate, msg.clone(), None),
            AppError::ReferentialConflict(msg) => (ErrorCode::CategoryInUse, msg.clone(), None),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (ErrorCode::DbFailure, "Database error".to_string(), None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (ErrorCode::Failure, "Internal server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(email(message = "invalid email"))]
        email: String,
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::ReferentialConflict("x".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_reports_every_failing_field() {
        let payload = Payload {
            name: String::new(),
            email: "not-an-email".into(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = field_errors(&errors);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "email");
        assert_eq!(fields[0].messages, vec!["invalid email".to_string()]);
        assert_eq!(fields[1].field, "name");
        assert_eq!(fields[1].messages, vec!["name must not be empty".to_string()]);
    }

    #[test]
    fn validation_status_is_bad_request() {
        let payload = Payload {
            name: String::new(),
            email: "a@b.fr".into(),
        };
        let err = AppError::from(payload.validate().unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
