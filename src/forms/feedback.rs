use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::forms::rules;
use crate::models;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feedback {
    pub title: String,
    pub review: String,
    pub user_id: i32,
    pub company_id: i32,
    pub category_id: i32,
    pub status_id: i32,
}

impl Feedback {
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

impl Into<models::Feedback> for Feedback {
    fn into(self) -> models::Feedback {
        models::Feedback {
            id: None,
            title: self.title,
            review: self.review,
            user_id: self.user_id,
            company_id: self.company_id,
            category_id: self.category_id,
            status_id: self.status_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_and_review_both_reported() {
        let form = Feedback {
            title: String::new(),
            review: "  ".to_string(),
            ..Feedback::default()
        };
        let violations = form.validate().unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
