use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Option<i32>,
    pub title: String,
    pub review: String,
    pub feedback_id: i32,
    pub user_id: i32,
    // assigned by the store at insert time
    pub created_at: Option<DateTime<Utc>>,
}
