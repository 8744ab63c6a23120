pub mod memory;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models;

/// Persistence seams. The storage layer implements these externally; the
/// services only ever see the traits. `save` assigns the next sequential id
/// when the entity carries none, `delete` reports whether a row existed, and
/// any storage failure surfaces as `AppError::Database`.

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<models::User>, AppError>;
    /// Identity lookup: resolves a subject (email) to the stored account.
    async fn find_by_email(&self, email: &str) -> Result<Option<models::User>, AppError>;
    async fn list(&self) -> Result<Vec<models::User>, AppError>;
    async fn save(&self, user: models::User) -> Result<models::User, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<models::Company>, AppError>;
    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<models::Company>, AppError>;
    async fn list(&self) -> Result<Vec<models::Company>, AppError>;
    async fn save(&self, company: models::Company) -> Result<models::Company, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<models::Category>, AppError>;
    async fn find_by_kind(&self, kind: &str) -> Result<Option<models::Category>, AppError>;
    async fn list(&self) -> Result<Vec<models::Category>, AppError>;
    async fn save(&self, category: models::Category) -> Result<models::Category, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<models::Status>, AppError>;
    async fn list(&self) -> Result<Vec<models::Status>, AppError>;
    async fn save(&self, status: models::Status) -> Result<models::Status, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait FeedbackStore: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<models::Feedback>, AppError>;
    async fn list(&self) -> Result<Vec<models::Feedback>, AppError>;
    async fn save(&self, feedback: models::Feedback) -> Result<models::Feedback, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

#[async_trait]
pub trait ReplyStore: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<models::Reply>, AppError>;
    async fn list(&self) -> Result<Vec<models::Reply>, AppError>;
    async fn list_by_feedback(&self, feedback_id: i32) -> Result<Vec<models::Reply>, AppError>;
    async fn save(&self, reply: models::Reply) -> Result<models::Reply, AppError>;
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
