use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::forms::rules;
use crate::models;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub email: String,
    pub cnpj: String,
}

impl Company {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();
        rules::require_non_blank(&mut violations, "name", &self.name);
        rules::require_non_blank(&mut violations, "email", &self.email);
        rules::require_email(&mut violations, "email", &self.email);
        rules::require_non_blank(&mut violations, "cnpj", &self.cnpj);
        rules::require_exact_digits(&mut violations, "cnpj", &self.cnpj, 14);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Into<models::Company> for Company {
    fn into(self) -> models::Company {
        models::Company {
            id: None,
            name: self.name,
            email: self.email,
            cnpj: self.cnpj,
        }
    }
}
