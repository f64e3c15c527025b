// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid input: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// A single rejected field in a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path, e.g. `availabilities[0].day_of_week`
    pub field: String,
    pub message: String,
    pub code: String,
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details, fields) = match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized", None, None),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token", None, None),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", Some(msg), None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg), None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", Some(msg), None),
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                "invalid_input",
                None,
                Some(fields),
            ),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    None,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        collect_field_errors("", &errors, &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

/// Flatten nested validator output into dotted field paths.
fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(FieldError {
                        field: path.clone(),
                        message: error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field '{}'", path)),
                        code: error.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
