//! Default board columns.

use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::{debug, info};

use crate::entity::{ActiveModel, Entity};

/// Statuses inserted into an empty table, as `(name, order)`
pub const DEFAULT_STATUSES: [(&str, i32); 2] = [("In Progress", 0), ("Done", 1)];

/// Insert [`DEFAULT_STATUSES`] when no status exists yet.
///
/// Returns whether anything was inserted. A table with at least one row is left untouched.
pub async fn seed_default_statuses(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let txn = db.begin().await?;

    if Entity::find().count(&txn).await? > 0 {
        debug!("Statuses already present, skipping seed");
        txn.commit().await?;
        return Ok(false);
    }

    let rows = DEFAULT_STATUSES.iter().map(|(name, order)| ActiveModel {
        name: Set((*name).to_string()),
        order: Set(*order),
        ..Default::default()
    });
    Entity::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    info!(count = DEFAULT_STATUSES.len(), "Seeded default statuses");
    Ok(true)
}
