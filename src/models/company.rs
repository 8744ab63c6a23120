use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub cnpj: String,
}
