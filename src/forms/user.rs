use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::forms::rules;
use crate::models;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub picture: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub company_id: Option<i32>,
}

impl Registration {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();
        rules::require_non_blank(&mut violations, "email", &self.email);
        rules::require_email(&mut violations, "email", &self.email);
        rules::require_non_blank(&mut violations, "password", &self.password);
        rules::require_max_length(&mut violations, "password", &self.password, 64);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Into<models::User> for Registration {
    fn into(self) -> models::User {
        models::User {
            id: None,
            email: self.email,
            password: self.password, // replaced with the hash before persisting
            picture: self.picture,
            is_admin: self.is_admin,
            company_id: self.company_id,
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
