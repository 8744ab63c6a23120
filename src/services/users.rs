use crate::errors::{AppError, ErrorCode};
use crate::forms;
use crate::models;
use crate::services::passwords::PasswordHasher;
use crate::stores::UserStore;

/// User management. CRUD requires an admin caller; `register` and
/// `authenticate` are the public entry points.

#[tracing::instrument(name = "Register a new user.", skip_all, fields(email = %form.email))]
pub async fn register(
    form: forms::user::Registration,
    store: &dyn UserStore,
    hasher: &dyn PasswordHasher,
) -> Result<models::User, AppError> {
    form.validate().map_err(AppError::Validation)?;

    if store.find_by_email(&form.email).await?.is_some() {
        return Err(AppError::domain(ErrorCode::UserAlreadyExists));
    }

    let mut user: models::User = form.into();
    user.password = hasher.hash(&user.password)?;

    let user = store.save(user).await?;
    tracing::info!("user {} registered", user.id.unwrap_or_default());
    Ok(user)
}

/// Check credentials against the stored hash. Unknown email and wrong
/// password are indistinguishable to the caller.
#[tracing::instrument(name = "Authenticate user.", skip_all, fields(email = %credentials.email))]
pub async fn authenticate(
    credentials: forms::user::Credentials,
    store: &dyn UserStore,
    hasher: &dyn PasswordHasher,
) -> Result<models::User, AppError> {
    let user = store
        .find_by_email(&credentials.email)
        .await?
        .ok_or(AppError::AuthenticationRequired)?;

    if !hasher.verify(&credentials.password, &user.password)? {
        tracing::warn!("failed login attempt");
        return Err(AppError::AuthenticationRequired);
    }

    Ok(user)
}

#[tracing::instrument(name = "Create user.", skip_all)]
pub async fn create(
    identity: &models::Identity,
    form: forms::user::Registration,
    store: &dyn UserStore,
    hasher: &dyn PasswordHasher,
) -> Result<models::User, AppError> {
    identity.require_admin()?;
    register(form, store, hasher).await
}

pub async fn get(
    identity: &models::Identity,
    id: i32,
    store: &dyn UserStore,
) -> Result<models::User, AppError> {
    identity.require_admin()?;
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound))
}

pub async fn list(
    identity: &models::Identity,
    store: &dyn UserStore,
) -> Result<Vec<models::User>, AppError> {
    identity.require_admin()?;
    store.list().await
}

#[tracing::instrument(name = "Update user.", skip_all, fields(id = id))]
pub async fn update(
    identity: &models::Identity,
    id: i32,
    form: forms::user::Registration,
    store: &dyn UserStore,
    hasher: &dyn PasswordHasher,
) -> Result<models::User, AppError> {
    identity.require_admin()?;
    form.validate().map_err(AppError::Validation)?;

    if store.find(id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::UserNotFound));
    }

    let mut user: models::User = form.into();
    user.id = Some(id);
    user.password = hasher.hash(&user.password)?;
    store.save(user).await
}

#[tracing::instrument(name = "Delete user.", skip_all, fields(id = id))]
pub async fn delete(
    identity: &models::Identity,
    id: i32,
    store: &dyn UserStore,
) -> Result<(), AppError> {
    identity.require_admin()?;
    if !store.delete(id).await? {
        return Err(AppError::not_found(ErrorCode::UserNotFound));
    }
    Ok(())
}
