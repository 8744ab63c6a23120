use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Option<i32>,
    pub title: String,
    pub review: String,
    pub user_id: i32,
    pub company_id: i32,
    pub category_id: i32,
    pub status_id: i32,
}
