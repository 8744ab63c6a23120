use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i32>,
    pub email: String,
    // stored hashed, never serialized back to clients
    #[serde(skip_serializing)]
    pub password: String,
    pub picture: Option<String>,
    pub is_admin: bool,
    pub company_id: Option<i32>,
}
