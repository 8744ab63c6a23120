use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::errors::AppError;
use crate::models;

use super::{CategoryStore, CompanyStore, FeedbackStore, ReplyStore, StatusStore, UserStore};

/// In-memory store backing every entity trait. Rows live in id-ordered maps
/// so listings are stable; ids are assigned sequentially on first save.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Table<models::User>>,
    companies: RwLock<Table<models::Company>>,
    categories: RwLock<Table<models::Category>>,
    statuses: RwLock<Table<models::Status>>,
    feedback: RwLock<Table<models::Feedback>>,
    replies: RwLock<Table<models::Reply>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Insert or replace; assigns the next id when `id` is absent.
    fn put(&mut self, id: Option<i32>, assign: impl FnOnce(i32) -> T) -> T {
        let id = match id {
            Some(id) => {
                if id >= self.next_id {
                    self.next_id = id + 1;
                }
                id
            }
            None => {
                let id = self.next_id;
                self.next_id += 1;
                id
            }
        };
        let row = assign(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }
}

fn read<T>(lock: &RwLock<Table<T>>) -> Result<RwLockReadGuard<'_, Table<T>>, AppError> {
    lock.read().map_err(|_| AppError::database("store lock poisoned"))
}

fn write<T>(lock: &RwLock<Table<T>>) -> Result<RwLockWriteGuard<'_, Table<T>>, AppError> {
    lock.write().map_err(|_| AppError::database("store lock poisoned"))
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find(&self, id: i32) -> Result<Option<models::User>, AppError> {
        Ok(read(&self.users)?.get(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<models::User>, AppError> {
        Ok(read(&self.users)?
            .all()
            .into_iter()
            .find(|user| user.email == email))
    }

    async fn list(&self) -> Result<Vec<models::User>, AppError> {
        Ok(read(&self.users)?.all())
    }

    async fn save(&self, user: models::User) -> Result<models::User, AppError> {
        Ok(write(&self.users)?.put(user.id, |id| models::User {
            id: Some(id),
            ..user
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(write(&self.users)?.remove(id))
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn find(&self, id: i32) -> Result<Option<models::Company>, AppError> {
        Ok(read(&self.companies)?.get(id))
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<models::Company>, AppError> {
        Ok(read(&self.companies)?
            .all()
            .into_iter()
            .find(|company| company.cnpj == cnpj))
    }

    async fn list(&self) -> Result<Vec<models::Company>, AppError> {
        Ok(read(&self.companies)?.all())
    }

    async fn save(&self, company: models::Company) -> Result<models::Company, AppError> {
        Ok(write(&self.companies)?.put(company.id, |id| models::Company {
            id: Some(id),
            ..company
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(write(&self.companies)?.remove(id))
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn find(&self, id: i32) -> Result<Option<models::Category>, AppError> {
        Ok(read(&self.categories)?.get(id))
    }

    async fn find_by_kind(&self, kind: &str) -> Result<Option<models::Category>, AppError> {
        Ok(read(&self.categories)?
            .all()
            .into_iter()
            .find(|category| category.kind == kind))
    }

    async fn list(&self) -> Result<Vec<models::Category>, AppError> {
        Ok(read(&self.categories)?.all())
    }

    async fn save(&self, category: models::Category) -> Result<models::Category, AppError> {
        Ok(write(&self.categories)?.put(category.id, |id| models::Category {
            id: Some(id),
            ..category
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(write(&self.categories)?.remove(id))
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn find(&self, id: i32) -> Result<Option<models::Status>, AppError> {
        Ok(read(&self.statuses)?.get(id))
    }

    async fn list(&self) -> Result<Vec<models::Status>, AppError> {
        Ok(read(&self.statuses)?.all())
    }

    async fn save(&self, status: models::Status) -> Result<models::Status, AppError> {
        Ok(write(&self.statuses)?.put(status.id, |id| models::Status {
            id: Some(id),
            ..status
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(write(&self.statuses)?.remove(id))
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn find(&self, id: i32) -> Result<Option<models::Feedback>, AppError> {
        Ok(read(&self.feedback)?.get(id))
    }

    async fn list(&self) -> Result<Vec<models::Feedback>, AppError> {
        Ok(read(&self.feedback)?.all())
    }

    async fn save(&self, feedback: models::Feedback) -> Result<models::Feedback, AppError> {
        Ok(write(&self.feedback)?.put(feedback.id, |id| models::Feedback {
            id: Some(id),
            ..feedback
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(write(&self.feedback)?.remove(id))
    }
}

#[async_trait]
impl ReplyStore for MemoryStore {
    async fn find(&self, id: i32) -> Result<Option<models::Reply>, AppError> {
        Ok(read(&self.replies)?.get(id))
    }

    async fn list(&self) -> Result<Vec<models::Reply>, AppError> {
        Ok(read(&self.replies)?.all())
    }

    async fn list_by_feedback(&self, feedback_id: i32) -> Result<Vec<models::Reply>, AppError> {
        Ok(read(&self.replies)?
            .all()
            .into_iter()
            .filter(|reply| reply.feedback_id == feedback_id)
            .collect())
    }

    async fn save(&self, reply: models::Reply) -> Result<models::Reply, AppError> {
        let created_at = match reply.id {
            Some(_) => reply.created_at,
            None => Some(Utc::now()),
        };
        Ok(write(&self.replies)?.put(reply.id, |id| models::Reply {
            id: Some(id),
            created_at,
            ..reply
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(write(&self.replies)?.remove(id))
    }
}
