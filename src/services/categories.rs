use crate::errors::{AppError, ErrorCode};
use crate::forms;
use crate::models;
use crate::stores::CategoryStore;

/// Category management, admin-only across the board.

#[tracing::instrument(name = "Create category.", skip_all, fields(kind = %form.kind))]
pub async fn create(
    identity: &models::Identity,
    form: forms::category::Category,
    store: &dyn CategoryStore,
) -> Result<models::Category, AppError> {
    identity.require_admin()?;
    form.validate().map_err(AppError::Validation)?;

    if store.find_by_kind(&form.kind).await?.is_some() {
        return Err(AppError::domain(ErrorCode::CategoryAlreadyExists));
    }

    store.save(form.into()).await
}

pub async fn get(
    identity: &models::Identity,
    id: i32,
    store: &dyn CategoryStore,
) -> Result<models::Category, AppError> {
    identity.require_admin()?;
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::CategoryNotFound))
}

pub async fn list(
    identity: &models::Identity,
    store: &dyn CategoryStore,
) -> Result<Vec<models::Category>, AppError> {
    identity.require_admin()?;
    store.list().await
}

#[tracing::instrument(name = "Update category.", skip_all, fields(id = id))]
pub async fn update(
    identity: &models::Identity,
    id: i32,
    form: forms::category::Category,
    store: &dyn CategoryStore,
) -> Result<models::Category, AppError> {
    identity.require_admin()?;
    if store.find(id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::CategoryNotFound));
    }
    form.validate().map_err(AppError::Validation)?;

    let mut category: models::Category = form.into();
    category.id = Some(id);
    store.save(category).await
}

#[tracing::instrument(name = "Delete category.", skip_all, fields(id = id))]
pub async fn delete(
    identity: &models::Identity,
    id: i32,
    store: &dyn CategoryStore,
) -> Result<(), AppError> {
    identity.require_admin()?;
    if !store.delete(id).await? {
        return Err(AppError::not_found(ErrorCode::CategoryNotFound));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::memory::MemoryStore;

    fn admin() -> models::Identity {
        models::Identity::new("admin@example.com", true)
    }

    fn bug_report() -> forms::category::Category {
        forms::category::Category {
            kind: "bug".to_string(),
            color: "#ff0000".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_kind_is_a_conflict() {
        let store = MemoryStore::new();
        create(&admin(), bug_report(), &store).await.unwrap();

        let err = create(&admin(), bug_report(), &store).await.unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::CategoryAlreadyExists);
    }

    #[tokio::test]
    async fn non_admin_cannot_even_read() {
        let store = MemoryStore::new();
        let user = models::Identity::new("user@example.com", false);

        let err = list(&user, &store).await.unwrap_err();
        assert_eq!(err, AppError::InsufficientPrivileges);
    }

    #[tokio::test]
    async fn blank_fields_fail_validation() {
        let store = MemoryStore::new();
        let err = create(
            &admin(),
            forms::category::Category {
                kind: String::new(),
                color: String::new(),
            },
            &store,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), ErrorCode::ValidationError);
    }
}
