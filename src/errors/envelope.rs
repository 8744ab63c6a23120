use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::code::ErrorCode;
use super::messages::{interpolate, MessageResolver};
use super::AppError;

/// A single failing field, collected during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<serde_json::Value>,
}

impl FieldError {
    pub fn new(field: &str, message: &str, rejected_value: Option<serde_json::Value>) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
            rejected_value,
        }
    }
}

/// Standard error envelope returned to clients.
///
/// `field_errors` is present only for validation-class failures and is
/// omitted from the wire otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    /// Serialize the envelope as the HTTP reply the boundary layer sends.
    pub fn to_http_response(&self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

/// Builds error envelopes: one entry point per error category.
///
/// Domain errors go through the name-pattern status rules; authentication,
/// authorization and token failures carry fixed statuses and bypass the
/// classifier. Message text comes from the localization collaborator, falling
/// back to the code's default message.
pub struct ErrorClassifier {
    messages: Arc<dyn MessageResolver>,
}

impl ErrorClassifier {
    pub fn new(messages: Arc<dyn MessageResolver>) -> Self {
        ErrorClassifier { messages }
    }

    /// Business-rule failure: status from the classification rules.
    pub fn domain(
        &self,
        code: ErrorCode,
        args: &[String],
        path: &str,
        locale: &str,
    ) -> ErrorResponse {
        self.envelope(code, args, code.http_status(), path, locale, None)
    }

    /// Missing entity, always 404 regardless of the code name.
    pub fn not_found(
        &self,
        code: ErrorCode,
        args: &[String],
        path: &str,
        locale: &str,
    ) -> ErrorResponse {
        self.envelope(code, args, StatusCode::NOT_FOUND, path, locale, None)
    }

    /// Field-level validation failure; every failing field is listed.
    pub fn validation(
        &self,
        violations: Vec<FieldError>,
        path: &str,
        locale: &str,
    ) -> ErrorResponse {
        self.envelope(
            ErrorCode::ValidationError,
            &[],
            StatusCode::BAD_REQUEST,
            path,
            locale,
            Some(violations),
        )
    }

    /// Constraint violations raised below the form layer (store-level checks).
    /// Same envelope shape as `validation`.
    pub fn constraint_violation(
        &self,
        violations: Vec<FieldError>,
        path: &str,
        locale: &str,
    ) -> ErrorResponse {
        self.validation(violations, path, locale)
    }

    /// Authentication is missing or failed: fixed 401, generic message.
    pub fn authentication(&self, path: &str, locale: &str) -> ErrorResponse {
        self.envelope(
            ErrorCode::UnauthorizedAccess,
            &[],
            StatusCode::UNAUTHORIZED,
            path,
            locale,
            None,
        )
    }

    /// Authenticated but not allowed: fixed 403.
    pub fn authorization(&self, path: &str, locale: &str) -> ErrorResponse {
        self.envelope(
            ErrorCode::InsufficientPrivileges,
            &[],
            StatusCode::FORBIDDEN,
            path,
            locale,
            None,
        )
    }

    /// Token parse failure: 401, expired and invalid reported distinctly.
    pub fn token(&self, error: &AppError, path: &str, locale: &str) -> ErrorResponse {
        let code = match error {
            AppError::TokenExpired => ErrorCode::TokenExpired,
            _ => ErrorCode::InvalidToken,
        };
        self.envelope(code, &[], StatusCode::UNAUTHORIZED, path, locale, None)
    }

    /// Anything uncategorized: 500 with a generic message, no internal detail.
    pub fn generic(&self, path: &str, locale: &str) -> ErrorResponse {
        self.envelope(
            ErrorCode::GenericError,
            &[],
            StatusCode::INTERNAL_SERVER_ERROR,
            path,
            locale,
            None,
        )
    }

    /// Dispatch any application error to the matching entry point.
    pub fn respond(&self, error: &AppError, path: &str, locale: &str) -> ErrorResponse {
        match error {
            AppError::Domain { code, args } => self.domain(*code, args, path, locale),
            AppError::NotFound { code, args } => self.not_found(*code, args, path, locale),
            AppError::Validation(violations) => {
                self.validation(violations.clone(), path, locale)
            }
            AppError::AuthenticationRequired => self.authentication(path, locale),
            AppError::InsufficientPrivileges => self.authorization(path, locale),
            AppError::TokenInvalid | AppError::TokenExpired => self.token(error, path, locale),
            AppError::Database(detail) => {
                tracing::error!("database failure on {}: {}", path, detail);
                self.domain(ErrorCode::DatabaseError, &[], path, locale)
            }
            AppError::Internal(detail) => {
                tracing::error!("unhandled failure on {}: {}", path, detail);
                self.generic(path, locale)
            }
        }
    }

    fn envelope(
        &self,
        code: ErrorCode,
        args: &[String],
        status: StatusCode,
        path: &str,
        locale: &str,
        field_errors: Option<Vec<FieldError>>,
    ) -> ErrorResponse {
        let message = self
            .messages
            .resolve(code.code(), locale, args)
            .unwrap_or_else(|| interpolate(code.default_message(), args));

        ErrorResponse {
            error_code: code.code().to_string(),
            message,
            status: status.as_u16(),
            timestamp: Utc::now(),
            path: path.to_string(),
            field_errors,
        }
    }
}
