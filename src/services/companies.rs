use crate::errors::{AppError, ErrorCode};
use crate::forms;
use crate::models;
use crate::stores::CompanyStore;

/// Company CRUD. Open to any caller; the cnpj is the uniqueness key.

#[tracing::instrument(name = "Create company.", skip_all, fields(cnpj = %form.cnpj))]
pub async fn create(
    form: forms::company::Company,
    store: &dyn CompanyStore,
) -> Result<models::Company, AppError> {
    form.validate().map_err(AppError::Validation)?;

    if store.find_by_cnpj(&form.cnpj).await?.is_some() {
        return Err(AppError::domain(ErrorCode::CompanyAlreadyExists));
    }

    store.save(form.into()).await
}

pub async fn get(id: i32, store: &dyn CompanyStore) -> Result<models::Company, AppError> {
    store
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::CompanyNotFound))
}

pub async fn list(store: &dyn CompanyStore) -> Result<Vec<models::Company>, AppError> {
    store.list().await
}

#[tracing::instrument(name = "Update company.", skip_all, fields(id = id))]
pub async fn update(
    id: i32,
    form: forms::company::Company,
    store: &dyn CompanyStore,
) -> Result<models::Company, AppError> {
    if store.find(id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::CompanyNotFound));
    }
    form.validate().map_err(AppError::Validation)?;

    let mut company: models::Company = form.into();
    company.id = Some(id);
    store.save(company).await
}

#[tracing::instrument(name = "Delete company.", skip_all, fields(id = id))]
pub async fn delete(id: i32, store: &dyn CompanyStore) -> Result<(), AppError> {
    if !store.delete(id).await? {
        return Err(AppError::not_found(ErrorCode::CompanyNotFound));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::memory::MemoryStore;

    fn acme() -> forms::company::Company {
        forms::company::Company {
            name: "Acme".to_string(),
            email: "contact@acme.com".to_string(),
            cnpj: "12345678000195".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_cnpj_is_a_conflict() {
        let store = MemoryStore::new();
        create(acme(), &store).await.unwrap();

        let err = create(
            forms::company::Company {
                name: "Acme Clone".to_string(),
                ..acme()
            },
            &store,
        )
        .await
        .unwrap_err();

        assert_eq!(err.error_code(), ErrorCode::CompanyAlreadyExists);
    }

    #[tokio::test]
    async fn missing_company_is_not_found() {
        let store = MemoryStore::new();
        let err = get(7, &store).await.unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::CompanyNotFound);
    }

    #[tokio::test]
    async fn update_keeps_the_id() {
        let store = MemoryStore::new();
        let created = create(acme(), &store).await.unwrap();

        let updated = update(
            created.id.unwrap(),
            forms::company::Company {
                name: "Acme Corp".to_string(),
                ..acme()
            },
            &store,
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Acme Corp");
    }
}
