use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::forms::rules;
use crate::models;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reply {
    pub title: String,
    pub review: String,
    pub feedback_id: i32,
    pub user_id: i32,
}

impl Reply {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Vec::new();
        rules::require_non_blank(&mut violations, "title", &self.title);
        rules::require_max_length(&mut violations, "title", &self.title, 255);
        rules::require_non_blank(&mut violations, "review", &self.review);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Into<models::Reply> for Reply {
    fn into(self) -> models::Reply {
        models::Reply {
            id: None,
            title: self.title,
            review: self.review,
            feedback_id: self.feedback_id,
            user_id: self.user_id,
            created_at: None, // stamped by the store
        }
    }
}
