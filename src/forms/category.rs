use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::forms::rules;
use crate::models;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    pub kind: String,
    pub color: String,
}

impl Category {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();
        rules::require_non_blank(&mut violations, "kind", &self.kind);
        rules::require_non_blank(&mut violations, "color", &self.color);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Into<models::Category> for Category {
    fn into(self) -> models::Category {
        models::Category {
            id: None,
            kind: self.kind,
            color: self.color,
        }
    }
}
