use actix_web::http::StatusCode;

/// Every error the system can report, with a stable machine-readable code.
///
/// Codes are partitioned into numeric ranges by domain so the range alone
/// identifies the owning subsystem. Localized messages are looked up by the
/// `ERR_NNNN` identifier; `default_message` is the fallback when no
/// translation exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Generic errors (1000-1099)
    GenericError,
    ValidationError,
    InvalidInput,
    ResourceNotFound,
    ResourceAlreadyExists,

    // User errors (2000-2099)
    UserNotFound,
    UserAlreadyExists,
    UserInvalidEmail,
    UserInvalidData,

    // Feedback errors (3000-3099)
    FeedbackNotFound,
    FeedbackInvalidData,
    FeedbackCannotDelete,

    // Reply errors (4000-4099)
    ReplyNotFound,
    ReplyInvalidData,

    // Company errors (5000-5099)
    CompanyNotFound,
    CompanyAlreadyExists,
    CompanyInvalidData,

    // Category errors (6000-6099)
    CategoryNotFound,
    CategoryAlreadyExists,
    CategoryInvalidData,

    // Status errors (7000-7099)
    StatusNotFound,
    StatusInvalidData,

    // Database errors (8000-8099)
    DatabaseError,
    DatabaseConnectionError,

    // Security errors (9000-9099)
    UnauthorizedAccess,
    InsufficientPrivileges,
    InvalidToken,
    TokenExpired,
}

impl ErrorCode {
    /// Stable identifier used on the wire and as the localization key.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::GenericError => "ERR_1000",
            ErrorCode::ValidationError => "ERR_1001",
            ErrorCode::InvalidInput => "ERR_1002",
            ErrorCode::ResourceNotFound => "ERR_1003",
            ErrorCode::ResourceAlreadyExists => "ERR_1004",
            ErrorCode::UserNotFound => "ERR_2000",
            ErrorCode::UserAlreadyExists => "ERR_2001",
            ErrorCode::UserInvalidEmail => "ERR_2002",
            ErrorCode::UserInvalidData => "ERR_2003",
            ErrorCode::FeedbackNotFound => "ERR_3000",
            ErrorCode::FeedbackInvalidData => "ERR_3001",
            ErrorCode::FeedbackCannotDelete => "ERR_3002",
            ErrorCode::ReplyNotFound => "ERR_4000",
            ErrorCode::ReplyInvalidData => "ERR_4001",
            ErrorCode::CompanyNotFound => "ERR_5000",
            ErrorCode::CompanyAlreadyExists => "ERR_5001",
            ErrorCode::CompanyInvalidData => "ERR_5002",
            ErrorCode::CategoryNotFound => "ERR_6000",
            ErrorCode::CategoryAlreadyExists => "ERR_6001",
            ErrorCode::CategoryInvalidData => "ERR_6002",
            ErrorCode::StatusNotFound => "ERR_7000",
            ErrorCode::StatusInvalidData => "ERR_7001",
            ErrorCode::DatabaseError => "ERR_8000",
            ErrorCode::DatabaseConnectionError => "ERR_8001",
            ErrorCode::UnauthorizedAccess => "ERR_9000",
            ErrorCode::InsufficientPrivileges => "ERR_9001",
            ErrorCode::InvalidToken => "ERR_9002",
            ErrorCode::TokenExpired => "ERR_9003",
        }
    }

    /// Symbolic name, the input to the status classification rules.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::GenericError => "GENERIC_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorCode::ResourceAlreadyExists => "RESOURCE_ALREADY_EXISTS",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::UserAlreadyExists => "USER_ALREADY_EXISTS",
            ErrorCode::UserInvalidEmail => "USER_INVALID_EMAIL",
            ErrorCode::UserInvalidData => "USER_INVALID_DATA",
            ErrorCode::FeedbackNotFound => "FEEDBACK_NOT_FOUND",
            ErrorCode::FeedbackInvalidData => "FEEDBACK_INVALID_DATA",
            ErrorCode::FeedbackCannotDelete => "FEEDBACK_CANNOT_DELETE",
            ErrorCode::ReplyNotFound => "REPLY_NOT_FOUND",
            ErrorCode::ReplyInvalidData => "REPLY_INVALID_DATA",
            ErrorCode::CompanyNotFound => "COMPANY_NOT_FOUND",
            ErrorCode::CompanyAlreadyExists => "COMPANY_ALREADY_EXISTS",
            ErrorCode::CompanyInvalidData => "COMPANY_INVALID_DATA",
            ErrorCode::CategoryNotFound => "CATEGORY_NOT_FOUND",
            ErrorCode::CategoryAlreadyExists => "CATEGORY_ALREADY_EXISTS",
            ErrorCode::CategoryInvalidData => "CATEGORY_INVALID_DATA",
            ErrorCode::StatusNotFound => "STATUS_NOT_FOUND",
            ErrorCode::StatusInvalidData => "STATUS_INVALID_DATA",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DatabaseConnectionError => "DATABASE_CONNECTION_ERROR",
            ErrorCode::UnauthorizedAccess => "UNAUTHORIZED_ACCESS",
            ErrorCode::InsufficientPrivileges => "INSUFFICIENT_PRIVILEGES",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::TokenExpired => "TOKEN_EXPIRED",
        }
    }

    /// Literal message used when no localized template is registered.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::GenericError => "An unexpected error occurred",
            ErrorCode::ValidationError => "Validation error",
            ErrorCode::InvalidInput => "Invalid input",
            ErrorCode::ResourceNotFound => "Resource not found",
            ErrorCode::ResourceAlreadyExists => "Resource already exists",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserAlreadyExists => "User already exists",
            ErrorCode::UserInvalidEmail => "User email address is not valid",
            ErrorCode::UserInvalidData => "User data is not valid",
            ErrorCode::FeedbackNotFound => "Feedback not found",
            ErrorCode::FeedbackInvalidData => "Feedback data is not valid",
            ErrorCode::FeedbackCannotDelete => "Feedback with replies cannot be deleted",
            ErrorCode::ReplyNotFound => "Reply not found",
            ErrorCode::ReplyInvalidData => "Reply data is not valid",
            ErrorCode::CompanyNotFound => "Company not found",
            ErrorCode::CompanyAlreadyExists => "Company already exists",
            ErrorCode::CompanyInvalidData => "Company data is not valid",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryAlreadyExists => "Category already exists",
            ErrorCode::CategoryInvalidData => "Category data is not valid",
            ErrorCode::StatusNotFound => "Status not found",
            ErrorCode::StatusInvalidData => "Status data is not valid",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::DatabaseConnectionError => "Database connection error",
            ErrorCode::UnauthorizedAccess => "Unauthorized access - authentication required",
            ErrorCode::InsufficientPrivileges => {
                "Insufficient privileges to access this resource"
            }
            ErrorCode::InvalidToken => "Token is invalid",
            ErrorCode::TokenExpired => "Token has expired",
        }
    }

    /// Map a domain code to an HTTP status.
    ///
    /// Rules apply in priority order, first match wins. Security codes are
    /// not classified here: the boundary layer reports them through their own
    /// envelope entry points with fixed 401/403 statuses.
    pub fn http_status(&self) -> StatusCode {
        let name = self.name();

        if name.ends_with("_NOT_FOUND") {
            return StatusCode::NOT_FOUND;
        }

        if name.ends_with("_ALREADY_EXISTS") {
            return StatusCode::CONFLICT;
        }

        if name.contains("INVALID") || name.contains("VALIDATION") {
            return StatusCode::BAD_REQUEST;
        }

        if self.is_database_error() {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }

        StatusCode::BAD_REQUEST
    }

    /// Whether the code falls in the database range (ERR_8000-8099).
    pub fn is_database_error(&self) -> bool {
        self.code().starts_with("ERR_8")
    }
}
