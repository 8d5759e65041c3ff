//! Translates a [`SearchRequest`] into SeaORM selects.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    Condition, EntityTrait, IdenStatic, Iterable, Order, QueryFilter, QueryOrder, QuerySelect,
    Select,
};
use std::str::FromStr;
use tracing::debug;

use crate::entity::CrudEntity;
use crate::error::{CrudError, CrudResult};
use crate::registry::{EntityDescriptor, MatchStrategy, SearchableField};
use crate::search::SearchRequest;

const LIKE_ESCAPE: char = '!';

/// The two statements a search runs: a count over the filtered rows and the page itself.
pub struct SearchQuery<E: EntityTrait> {
    pub count: Select<E>,
    pub page: Select<E>,
}

pub fn build_search<E: CrudEntity>(
    descriptor: &EntityDescriptor,
    request: &SearchRequest,
) -> CrudResult<SearchQuery<E>> {
    let order_column = resolve_column::<E>(&request.order_by_column).ok_or_else(|| {
        CrudError::InvalidColumn(format!(
            "Invalid orderByColumn: {}",
            request.order_by_column
        ))
    })?;

    if !request.criteria.is_empty() {
        debug!(criteria = ?request.criteria, "Ignoring search criteria");
    }

    let mut filtered = E::find();
    if let Some(condition) =
        global_filter_condition::<E>(descriptor.list_searchable_fields(), &request.global_filter)
    {
        filtered = filtered.filter(condition);
    }

    let direction = if request.ascending {
        Order::Asc
    } else {
        Order::Desc
    };

    let mut page = filtered.clone().order_by(order_column, direction.clone());
    if order_column.as_str() != E::id_column().as_str() {
        page = page.order_by(E::id_column(), direction);
    }
    let page = page.offset(request.offset()).limit(request.page_size);

    Ok(SearchQuery {
        count: filtered,
        page,
    })
}

fn resolve_column<E: EntityTrait>(name: &str) -> Option<E::Column> {
    E::Column::iter().find(|column| column.as_str() == name)
}

/// OR of one case-insensitive match per searchable field; `None` when there is nothing to filter.
pub fn global_filter_condition<E: EntityTrait>(
    fields: &[SearchableField],
    value: &str,
) -> Option<Condition> {
    let needle = value.trim();
    if needle.is_empty() || fields.is_empty() {
        return None;
    }

    let needle = needle.to_lowercase();
    let escaped = escape_like(&needle);

    let condition = fields
        .iter()
        .filter_map(|field| {
            let column = E::Column::from_str(&field.field).ok()?;
            let lowered = Expr::expr(Func::lower(Expr::col((E::default(), column))));
            Some(match_expr(lowered, field.strategy, &needle, &escaped))
        })
        .fold(Condition::any(), |condition, expr| condition.add(expr));

    Some(condition)
}

fn match_expr(lowered: Expr, strategy: MatchStrategy, needle: &str, escaped: &str) -> SimpleExpr {
    let pattern = match strategy {
        MatchStrategy::Exact => return lowered.eq(needle),
        MatchStrategy::Partial => format!("%{escaped}%"),
        MatchStrategy::Prefix => format!("{escaped}%"),
        MatchStrategy::Suffix => format!("%{escaped}"),
    };
    lowered.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Escapes LIKE wildcards and the escape character itself.
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
