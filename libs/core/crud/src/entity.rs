use async_trait::async_trait;
use database::IdEntity;
use sea_orm::{ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait};
use serde::Serialize;
use serde::de::DeserializeOwned;
use utoipa::ToSchema;
use validator::Validate;

use crate::registry::SearchableField;

/// An entity served by the generic CRUD service and router.
///
/// Implementations tie a SeaORM entity to its URL name, its API DTOs and the
/// columns free-text search looks at.
#[async_trait]
pub trait CrudEntity: IdEntity + EntityTrait<Model: Sync> + Send + Sync + 'static {
    /// URL segment and registry key, e.g. `"task"`
    const NAME: &'static str;
    /// Display name used in messages, e.g. `"Task"`
    const LABEL: &'static str;

    type Active: ActiveModelTrait<Entity = Self> + Send + Sync + 'static;
    type Dto: Serialize + ToSchema + From<Self::Model> + Send + 'static;
    type Create: DeserializeOwned + Validate + ToSchema + Send + 'static;
    type Update: DeserializeOwned + Validate + ToSchema + Send + 'static;

    fn searchable_fields() -> Vec<SearchableField>;

    fn new_active(input: Self::Create) -> Self::Active;

    /// Active model holding only the supplied fields.
    fn patch_active(input: Self::Update) -> Self::Active;

    /// Runs inside the create transaction before the row is written.
    async fn before_insert(
        _txn: &DatabaseTransaction,
        _active: &mut Self::Active,
    ) -> Result<(), DbErr> {
        Ok(())
    }
}
