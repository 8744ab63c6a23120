use crate::errors::{AppError, ErrorCode};
use crate::forms;
use crate::models;
use crate::stores::{CategoryStore, CompanyStore, FeedbackStore, ReplyStore, StatusStore, UserStore};

/// Feedback CRUD. Open to any caller; every referenced entity must exist,
/// and feedback that has replies cannot be deleted.

pub struct FeedbackRefs<'a> {
    pub users: &'a dyn UserStore,
    pub companies: &'a dyn CompanyStore,
    pub categories: &'a dyn CategoryStore,
    pub statuses: &'a dyn StatusStore,
}

async fn check_references(
    form: &forms::feedback::Feedback,
    refs: &FeedbackRefs<'_>,
) -> Result<(), AppError> {
    if refs.users.find(form.user_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::UserNotFound));
    }
    if refs.companies.find(form.company_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::CompanyNotFound));
    }
    if refs.categories.find(form.category_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::CategoryNotFound));
    }
    if refs.statuses.find(form.status_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::StatusNotFound));
    }
    Ok(())
}

#[tracing::instrument(name = "Create feedback.", skip_all, fields(title = %form.title))]
pub async fn create(
    form: forms::feedback::Feedback,
    store: &dyn FeedbackStore,
    refs: &FeedbackRefs<'_>,
) -> Result<models::Feedback, AppError> {
    form.validate().map_err(AppError::Validation)?;
    check_references(&form, refs).await?;

    let feedback = store.save(form.into()).await?;
    tracing::info!("feedback {} created", feedback.id.unwrap_or_default());
    Ok(feedback)
}

pub async fn get(id: i32, store: &dyn FeedbackStore) -> Result<models::Feedback, AppError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::FeedbackNotFound))
}

pub async fn list(store: &dyn FeedbackStore) -> Result<Vec<models::Feedback>, AppError> {
    store.list().await
}

#[tracing::instrument(name = "Update feedback.", skip_all, fields(id = id))]
pub async fn update(
    id: i32,
    form: forms::feedback::Feedback,
    store: &dyn FeedbackStore,
    refs: &FeedbackRefs<'_>,
) -> Result<models::Feedback, AppError> {
    if store.find(id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::FeedbackNotFound));
    }
    form.validate().map_err(AppError::Validation)?;
    check_references(&form, refs).await?;

    let mut feedback: models::Feedback = form.into();
    feedback.id = Some(id);
    store.save(feedback).await
}

/// Delete is refused while replies still reference the entry.
#[tracing::instrument(name = "Delete feedback.", skip_all, fields(id = id))]
pub async fn delete(
    id: i32,
    store: &dyn FeedbackStore,
    replies: &dyn ReplyStore,
) -> Result<(), AppError> {
    if store.find(id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::FeedbackNotFound));
    }

    if !replies.list_by_feedback(id).await?.is_empty() {
        return Err(AppError::domain(ErrorCode::FeedbackCannotDelete));
    }

    store.delete(id).await?;
    Ok(())
}
