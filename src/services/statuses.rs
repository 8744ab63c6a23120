use crate::errors::{AppError, ErrorCode};
use crate::forms;
use crate::models;
use crate::stores::StatusStore;

/// Workflow status management, admin-only.

#[tracing::instrument(name = "Create status.", skip_all, fields(kind = %form.kind))]
pub async fn create(
    identity: &models::Identity,
    form: forms::status::Status,
    store: &dyn StatusStore,
) -> Result<models::Status, AppError> {
    identity.require_admin()?;
    form.validate().map_err(AppError::Validation)?;
    store.save(form.into()).await
}

pub async fn get(
    identity: &models::Identity,
    id: i32,
    store: &dyn StatusStore,
) -> Result<models::Status, AppError> {
    identity.require_admin()?;
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::StatusNotFound))
}

pub async fn list(
    identity: &models::Identity,
    store: &dyn StatusStore,
) -> Result<Vec<models::Status>, AppError> {
    identity.require_admin()?;
    store.list().await
}

#[tracing::instrument(name = "Update status.", skip_all, fields(id = id))]
pub async fn update(
    identity: &models::Identity,
    id: i32,
    form: forms::status::Status,
    store: &dyn StatusStore,
) -> Result<models::Status, AppError> {
    identity.require_admin()?;
    if store.find(id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::StatusNotFound));
    }
    form.validate().map_err(AppError::Validation)?;

    let mut status: models::Status = form.into();
    status.id = Some(id);
    store.save(status).await
}

#[tracing::instrument(name = "Delete status.", skip_all, fields(id = id))]
pub async fn delete(
    identity: &models::Identity,
    id: i32,
    store: &dyn StatusStore,
) -> Result<(), AppError> {
    identity.require_admin()?;
    if !store.delete(id).await? {
        return Err(AppError::not_found(ErrorCode::StatusNotFound));
    }
    Ok(())
}
