use database::BaseRepository;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DatabaseTransaction, PaginatorTrait};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::entity::CrudEntity;
use crate::error::{CrudError, CrudResult};
use crate::query::build_search;
use crate::registry::{EntityDescriptor, EntityRegistry};
use crate::search::{SearchRequest, SearchResponse, page_count};

/// Uniform CRUD and search operations for one entity.
///
/// Each mutation runs in its own transaction, which is rolled back before an
/// error is returned.
pub struct CrudService<E: CrudEntity> {
    repository: Arc<BaseRepository<E>>,
    descriptor: Arc<EntityDescriptor>,
}

impl<E: CrudEntity> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            descriptor: self.descriptor.clone(),
        }
    }
}

impl<E: CrudEntity> CrudService<E> {
    /// Fails with [`CrudError::InvalidColumn`] if `E` was not registered.
    pub fn new(db: DatabaseConnection, registry: &EntityRegistry) -> CrudResult<Self> {
        let descriptor = registry.descriptor(E::NAME).ok_or_else(|| {
            CrudError::InvalidColumn(format!("Entity {} is not registered", E::NAME))
        })?;

        Ok(Self {
            repository: Arc::new(BaseRepository::new(db)),
            descriptor,
        })
    }

    pub fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    #[instrument(skip(self, request), fields(entity = E::NAME, page_no = request.page_no, page_size = request.page_size))]
    pub async fn search(&self, request: SearchRequest) -> CrudResult<SearchResponse<E::Dto>> {
        request.validate()?;

        let query = build_search::<E>(&self.descriptor, &request)?;
        let db = self.repository.db();

        let total = query.count.count(db).await?;
        // Offsets past the last row would also overflow the driver's i64 binding
        let items = if request.offset() >= total {
            Vec::new()
        } else {
            query.page.all(db).await?
        };

        Ok(SearchResponse {
            page_count: page_count(total, request.page_size),
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// Every row in id order. Storage failures surface as `NotFound`.
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get_all(&self) -> CrudResult<Vec<E::Dto>> {
        let models = self
            .repository
            .find_all(self.repository.db())
            .await
            .map_err(|e| CrudError::NotFound(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get(&self, id: i32) -> CrudResult<E::Dto> {
        self.repository
            .find_by_id(self.repository.db(), id)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found::<E>(id))
    }

    #[instrument(skip(self, input), fields(entity = E::NAME))]
    pub async fn create(&self, input: E::Create) -> CrudResult<E::Dto> {
        input.validate()?;

        let txn = self.repository.begin().await?;
        let result: CrudResult<_> = async {
            let mut active = E::new_active(input);
            E::before_insert(&txn, &mut active)
                .await
                .map_err(|e| CrudError::classify(e, CrudError::Conflict))?;

            self.repository
                .insert(&txn, active)
                .await
                .map_err(|e| CrudError::classify(e, CrudError::Conflict))
        }
        .await;

        let model = finish(txn, result).await?;
        info!(entity = E::NAME, "Created row");
        Ok(model.into())
    }

    /// Applies the supplied fields only; an empty patch returns the row unchanged.
    #[instrument(skip(self, input), fields(entity = E::NAME))]
    pub async fn update(&self, id: i32, input: E::Update) -> CrudResult<E::Dto> {
        input.validate()?;

        let txn = self.repository.begin().await?;
        let result: CrudResult<_> = async {
            let existing = self
                .repository
                .find_by_id(&txn, id)
                .await?
                .ok_or_else(|| not_found::<E>(id))?;

            let active = E::patch_active(input);
            if !active.is_changed() {
                return Ok(existing);
            }

            self.repository
                .update(&txn, id, active)
                .await
                .map_err(|e| CrudError::classify(e, CrudError::Validation))?;

            self.repository
                .find_by_id(&txn, id)
                .await?
                .ok_or_else(|| not_found::<E>(id))
        }
        .await;

        let model = finish(txn, result).await?;
        info!(entity = E::NAME, id, "Updated row");
        Ok(model.into())
    }

    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn remove(&self, id: i32) -> CrudResult<()> {
        let txn = self.repository.begin().await?;
        let result: CrudResult<_> = async {
            let rows = self
                .repository
                .delete(&txn, id)
                .await
                .map_err(|e| CrudError::classify(e, CrudError::Validation))?;

            if rows == 0 {
                return Err(not_found::<E>(id));
            }
            Ok(())
        }
        .await;

        finish(txn, result).await?;
        info!(entity = E::NAME, id, "Deleted row");
        Ok(())
    }
}

fn not_found<E: CrudEntity>(id: i32) -> CrudError {
    CrudError::NotFound(format!("{} with id={} not found", E::LABEL, id))
}

/// Commits on success, rolls back on failure.
pub async fn finish<T>(txn: DatabaseTransaction, result: CrudResult<T>) -> CrudResult<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback) = txn.rollback().await {
                warn!(error = %rollback, "Rollback failed");
            }
            Err(err)
        }
    }
}
