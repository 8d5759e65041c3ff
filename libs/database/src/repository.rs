//! Generic single-entity data access over SeaORM.
//!
//! Every query method takes the connection explicitly so the same repository can
//! run against the pool or inside a transaction opened with [`BaseRepository::begin`].

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityName, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::marker::PhantomData;
use tracing::debug;

/// Entity with a single integer primary key.
pub trait IdEntity: EntityTrait {
    fn id_column() -> Self::Column;
}

pub struct BaseRepository<E: IdEntity> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: IdEntity> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: IdEntity> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.db.begin().await
    }

    /// All rows ordered by id.
    pub async fn find_all<C>(&self, conn: &C) -> Result<Vec<E::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        E::find().order_by_asc(E::id_column()).all(conn).await
    }

    pub async fn find_by_id<C>(&self, conn: &C, id: i32) -> Result<Option<E::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        E::find().filter(E::id_column().eq(id)).one(conn).await
    }

    /// Inserts `active` and returns the stored row, including database defaults.
    pub async fn insert<C, A>(&self, conn: &C, active: A) -> Result<E::Model, DbErr>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E>,
    {
        let result = E::insert(active).exec(conn).await?;

        let model = E::find_by_id(result.last_insert_id)
            .one(conn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "{} row missing after insert",
                    E::default().table_name()
                ))
            })?;

        debug!(table = E::default().table_name(), "Inserted row");
        Ok(model)
    }

    /// Writes the changed columns of `active` to row `id`; returns rows affected.
    ///
    /// An active model without changed columns is a no-op returning 0.
    pub async fn update<C, A>(&self, conn: &C, id: i32, active: A) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E>,
    {
        if !active.is_changed() {
            return Ok(0);
        }

        let result = E::update_many()
            .set(active)
            .filter(E::id_column().eq(id))
            .exec(conn)
            .await?;

        debug!(table = E::default().table_name(), id, rows = result.rows_affected, "Updated row");
        Ok(result.rows_affected)
    }

    /// Deletes row `id`; returns rows affected.
    pub async fn delete<C>(&self, conn: &C, id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(conn)
            .await?;

        debug!(table = E::default().table_name(), id, rows = result.rows_affected, "Deleted row");
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveValue::Set, ConnectOptions, Database, Schema};

    mod note {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "note")]
        pub struct Model {
            #[sea_orm(primary_key)]
            pub id: i32,
            pub title: String,
            pub body: Option<String>,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}

        impl crate::repository::IdEntity for Entity {
            fn id_column() -> Column {
                Column::Id
            }
        }
    }

    async fn repo() -> BaseRepository<note::Entity> {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let db = Database::connect(options).await.unwrap();

        let backend = db.get_database_backend();
        let stmt = Schema::new(backend).create_table_from_entity(note::Entity);
        db.execute(backend.build(&stmt)).await.unwrap();

        BaseRepository::new(db)
    }

    fn new_note(title: &str) -> note::ActiveModel {
        note::ActiveModel {
            title: Set(title.to_string()),
            body: Set(None),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let repo = repo().await;

        let first = repo.insert(repo.db(), new_note("first")).await.unwrap();
        let second = repo.insert(repo.db(), new_note("second")).await.unwrap();

        assert_eq!(first.title, "first");
        assert!(second.id > first.id);

        let all = repo.find_all(repo.db()).await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_update_only_touches_set_columns() {
        let repo = repo().await;
        let stored = repo.insert(repo.db(), new_note("draft")).await.unwrap();

        let patch = note::ActiveModel {
            body: Set(Some("hello".to_string())),
            ..Default::default()
        };
        assert_eq!(repo.update(repo.db(), stored.id, patch).await.unwrap(), 1);

        let reloaded = repo.find_by_id(repo.db(), stored.id).await.unwrap().unwrap();
        assert_eq!(reloaded.title, "draft");
        assert_eq!(reloaded.body.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_empty_update_is_noop() {
        let repo = repo().await;
        let stored = repo.insert(repo.db(), new_note("same")).await.unwrap();

        let rows = repo
            .update(repo.db(), stored.id, <note::ActiveModel as Default>::default())
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_row_affects_nothing() {
        let repo = repo().await;
        let stored = repo.insert(repo.db(), new_note("gone")).await.unwrap();

        assert_eq!(repo.delete(repo.db(), stored.id).await.unwrap(), 1);
        assert_eq!(repo.delete(repo.db(), stored.id).await.unwrap(), 0);
        assert!(repo.find_by_id(repo.db(), stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rolled_back_transaction_discards_insert() {
        let repo = repo().await;

        let txn = repo.begin().await.unwrap();
        repo.insert(&txn, new_note("temp")).await.unwrap();
        txn.rollback().await.unwrap();

        assert!(repo.find_all(repo.db()).await.unwrap().is_empty());
    }
}
