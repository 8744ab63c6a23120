use crate::errors::{AppError, ErrorCode};
use crate::forms;
use crate::models;
use crate::stores::{FeedbackStore, ReplyStore, UserStore};

/// Reply management, admin-only. A reply always points at an existing
/// feedback entry and author.

async fn check_references(
    form: &forms::reply::Reply,
    feedback: &dyn FeedbackStore,
    users: &dyn UserStore,
) -> Result<(), AppError> {
    if feedback.find(form.feedback_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::FeedbackNotFound));
    }
    if users.find(form.user_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::UserNotFound));
    }
    Ok(())
}

#[tracing::instrument(name = "Create reply.", skip_all, fields(feedback_id = form.feedback_id))]
pub async fn create(
    identity: &models::Identity,
    form: forms::reply::Reply,
    store: &dyn ReplyStore,
    feedback: &dyn FeedbackStore,
    users: &dyn UserStore,
) -> Result<models::Reply, AppError> {
    identity.require_admin()?;
    form.validate().map_err(AppError::Validation)?;
    check_references(&form, feedback, users).await?;

    store.save(form.into()).await
}

pub async fn get(
    identity: &models::Identity,
    id: i32,
    store: &dyn ReplyStore,
) -> Result<models::Reply, AppError> {
    identity.require_admin()?;
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::ReplyNotFound))
}

pub async fn list(
    identity: &models::Identity,
    store: &dyn ReplyStore,
) -> Result<Vec<models::Reply>, AppError> {
    identity.require_admin()?;
    store.list().await
}

#[tracing::instrument(name = "Update reply.", skip_all, fields(id = id))]
pub async fn update(
    identity: &models::Identity,
    id: i32,
    form: forms::reply::Reply,
    store: &dyn ReplyStore,
    feedback: &dyn FeedbackStore,
    users: &dyn UserStore,
) -> Result<models::Reply, AppError> {
    identity.require_admin()?;
    let existing = store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::ReplyNotFound))?;
    form.validate().map_err(AppError::Validation)?;
    check_references(&form, feedback, users).await?;

    let mut reply: models::Reply = form.into();
    reply.id = Some(id);
    reply.created_at = existing.created_at;
    store.save(reply).await
}

#[tracing::instrument(name = "Delete reply.", skip_all, fields(id = id))]
pub async fn delete(
    identity: &models::Identity,
    id: i32,
    store: &dyn ReplyStore,
) -> Result<(), AppError> {
    identity.require_admin()?;
    if !store.delete(id).await? {
        return Err(AppError::not_found(ErrorCode::ReplyNotFound));
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

    async fn seed(store: &MemoryStore) -> forms::reply::Reply {
        let user = UserStore::save(
            store,
            models::User {
                email: "a@x.com".to_string(),
                password: "hash".to_string(),
                ..models::User::default()
            },
        )
        .await
        .unwrap();
        let feedback = FeedbackStore::save(
            store,
            models::Feedback {
                title: "Login broken".to_string(),
                review: "Cannot sign in".to_string(),
                user_id: user.id.unwrap(),
                company_id: 1,
                category_id: 1,
                status_id: 1,
                ..models::Feedback::default()
            },
        )
        .await
        .unwrap();

        forms::reply::Reply {
            title: "On it".to_string(),
            review: "Investigating now".to_string(),
            feedback_id: feedback.id.unwrap(),
            user_id: user.id.unwrap(),
        }
    }

    #[tokio::test]
    async fn create_stamps_created_at() {
        let store = MemoryStore::new();
        let form = seed(&store).await;

        let reply = create(&admin(), form, &store, &store, &store)
            .await
            .unwrap();
        assert!(reply.created_at.is_some());
    }

    #[tokio::test]
    async fn update_preserves_created_at() {
        let store = MemoryStore::new();
        let form = seed(&store).await;
        let created = create(&admin(), form.clone(), &store, &store, &store)
            .await
            .unwrap();

        let updated = update(
            &admin(),
            created.id.unwrap(),
            forms::reply::Reply {
                review: "Fixed in release 1.2".to_string(),
                ..form
            },
            &store,
            &store,
            &store,
        )
        .await
        .unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.review, "Fixed in release 1.2");
    }

    #[tokio::test]
    async fn reply_to_missing_feedback_is_rejected() {
        let store = MemoryStore::new();
        let mut form = seed(&store).await;
        form.feedback_id = 77;

        let err = create(&admin(), form, &store, &store, &store)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::FeedbackNotFound);
    }

    #[tokio::test]
    async fn non_admin_is_rejected() {
        let store = MemoryStore::new();
        let user = models::Identity::new("user@example.com", false);
        let form = seed(&store).await;

        let err = create(&user, form, &store, &store, &store)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::InsufficientPrivileges);
    }
}
