use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: Option<i32>,
    pub kind: String,
    pub color: Option<String>,
}
