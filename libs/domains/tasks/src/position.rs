//! Ordering of tasks within a status column.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::entity::{Column, Entity};

/// Position for a task appended to `status_id`: one past the current maximum,
/// or 0 when the status has no tasks.
///
/// Two concurrent creates in the same status can compute the same value;
/// positions are not required to be unique.
pub async fn next_position<C: ConnectionTrait>(conn: &C, status_id: i32) -> Result<i32, DbErr> {
    let max: Option<Option<i32>> = Entity::find()
        .select_only()
        .expr(Expr::col(Column::Position).max())
        .filter(Column::StatusId.eq(status_id))
        .into_tuple()
        .one(conn)
        .await?;

    Ok(max.flatten().map_or(0, |max| max + 1))
}
