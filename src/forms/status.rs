use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::forms::rules;
use crate::models;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    pub kind: String,
    pub color: Option<String>,
}

impl Status {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();
        rules::require_non_blank(&mut violations, "kind", &self.kind);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Into<models::Status> for Status {
    fn into(self) -> models::Status {
        models::Status {
            id: None,
            kind: self.kind,
            color: self.color,
        }
    }
}
