use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The authenticated caller, as decoded from a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub subject: String,
    pub is_admin: bool,
}

impl Identity {
    pub fn new(subject: &str, is_admin: bool) -> Self {
        Identity {
            subject: subject.to_string(),
            is_admin,
        }
    }

    /// Gate for admin-only operations.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::InsufficientPrivileges)
        }
    }
}
