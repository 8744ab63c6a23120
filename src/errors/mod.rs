mod code;
mod envelope;
mod messages;

pub use code::ErrorCode;
pub use envelope::{ErrorClassifier, ErrorResponse, FieldError};
pub use messages::{interpolate, MessageCatalog, MessageResolver};

/// Application error taxonomy.
///
/// Every failure the domain can raise, each carrying enough to build the
/// error envelope. Token parse failures are recovered where they happen and
/// translated into `TokenInvalid`/`TokenExpired`; everything else propagates
/// to the boundary for classification.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    /// Business-rule failure carrying a domain code.
    #[error("{}", .code.default_message())]
    Domain {
        code: ErrorCode,
        args: Vec<String>,
    },
    /// A requested entity does not exist.
    #[error("{}", .code.default_message())]
    NotFound {
        code: ErrorCode,
        args: Vec<String>,
    },
    /// Input failed field-level validation; all failing fields are reported.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("insufficient privileges")]
    InsufficientPrivileges,
    #[error("token is invalid")]
    TokenInvalid,
    #[error("token has expired")]
    TokenExpired,
    #[error("database failure: {0}")]
    Database(String),
    /// Uncategorized failure; detail is logged, never sent to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn domain(code: ErrorCode) -> Self {
        AppError::Domain {
            code,
            args: Vec::new(),
        }
    }

    pub fn domain_with(code: ErrorCode, args: Vec<String>) -> Self {
        AppError::Domain { code, args }
    }

    pub fn not_found(code: ErrorCode) -> Self {
        AppError::NotFound {
            code,
            args: Vec::new(),
        }
    }

    pub fn database(detail: impl Into<String>) -> Self {
        AppError::Database(detail.into())
    }

    /// The stable code reported for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Domain { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::AuthenticationRequired => ErrorCode::UnauthorizedAccess,
            AppError::InsufficientPrivileges => ErrorCode::InsufficientPrivileges,
            AppError::TokenInvalid => ErrorCode::InvalidToken,
            AppError::TokenExpired => ErrorCode::TokenExpired,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Internal(_) => ErrorCode::GenericError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_one_code() {
        assert_eq!(
            AppError::domain(ErrorCode::UserAlreadyExists).error_code(),
            ErrorCode::UserAlreadyExists
        );
        assert_eq!(
            AppError::not_found(ErrorCode::ReplyNotFound).error_code(),
            ErrorCode::ReplyNotFound
        );
        assert_eq!(
            AppError::Validation(vec![]).error_code(),
            ErrorCode::ValidationError
        );
        assert_eq!(
            AppError::AuthenticationRequired.error_code(),
            ErrorCode::UnauthorizedAccess
        );
        assert_eq!(
            AppError::InsufficientPrivileges.error_code(),
            ErrorCode::InsufficientPrivileges
        );
        assert_eq!(AppError::TokenInvalid.error_code(), ErrorCode::InvalidToken);
        assert_eq!(AppError::TokenExpired.error_code(), ErrorCode::TokenExpired);
        assert_eq!(
            AppError::database("down").error_code(),
            ErrorCode::DatabaseError
        );
        assert_eq!(
            AppError::Internal("boom".into()).error_code(),
            ErrorCode::GenericError
        );
    }

    #[test]
    fn display_uses_the_default_message() {
        let err = AppError::domain(ErrorCode::FeedbackCannotDelete);
        assert_eq!(err.to_string(), "Feedback with replies cannot be deleted");
    }
}
