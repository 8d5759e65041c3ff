//! Static descriptions of the entities served by the generic CRUD layer.

use sea_orm::sea_query::ColumnType;
use sea_orm::{ColumnTrait, EntityTrait, IdenStatic, Iterable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::info;

use crate::entity::CrudEntity;
use crate::error::{CrudError, CrudResult};

/// How a global filter value is matched against a searchable column.
///
/// Every strategy compares case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Partial,
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableField {
    pub field: String,
    pub strategy: MatchStrategy,
    /// Higher weights are listed first
    pub weight: i32,
}

impl SearchableField {
    pub fn new(field: impl Into<String>, strategy: MatchStrategy, weight: i32) -> Self {
        Self {
            field: field.into(),
            strategy,
            weight,
        }
    }

    pub fn partial(field: impl Into<String>, weight: i32) -> Self {
        Self::new(field, MatchStrategy::Partial, weight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnDescriptor {
    pub fn is_textual(&self) -> bool {
        matches!(
            self.column_type,
            ColumnType::String(_) | ColumnType::Text | ColumnType::Char(_)
        )
    }
}

#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    pub name: &'static str,
    pub columns: Vec<ColumnDescriptor>,
    searchable: Vec<SearchableField>,
}

impl EntityDescriptor {
    /// Describes `E` from its column definitions and declared searchable fields.
    ///
    /// Fails with [`CrudError::InvalidColumn`] if a searchable field is not a text column of `E`.
    pub fn of<E: CrudEntity>() -> CrudResult<Self> {
        let columns: Vec<ColumnDescriptor> = <E as EntityTrait>::Column::iter()
            .map(|column| ColumnDescriptor {
                name: column.as_str().to_string(),
                column_type: column.def().get_column_type().clone(),
            })
            .collect();

        let mut searchable = E::searchable_fields();
        for field in &searchable {
            match columns.iter().find(|c| c.name == field.field) {
                Some(column) if column.is_textual() => {}
                Some(_) => {
                    return Err(CrudError::InvalidColumn(format!(
                        "Searchable field {}.{} is not a text column",
                        E::NAME,
                        field.field
                    )));
                }
                None => {
                    return Err(CrudError::InvalidColumn(format!(
                        "Searchable field {}.{} does not exist",
                        E::NAME,
                        field.field
                    )));
                }
            }
        }
        // stable: equal weights keep declaration order
        searchable.sort_by(|a, b| b.weight.cmp(&a.weight));

        Ok(Self {
            name: E::NAME,
            columns,
            searchable,
        })
    }

    /// Searchable fields, heaviest first.
    pub fn list_searchable_fields(&self) -> &[SearchableField] {
        &self.searchable
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Entity name to descriptor map, built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: HashMap<&'static str, Arc<EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `E` under [`CrudEntity::NAME`], replacing any previous registration.
    pub fn register<E: CrudEntity>(&mut self) -> CrudResult<&mut Self> {
        let descriptor = EntityDescriptor::of::<E>()?;
        info!(
            entity = E::NAME,
            columns = descriptor.columns.len(),
            searchable = descriptor.searchable.len(),
            "Registered entity"
        );
        self.entities.insert(E::NAME, Arc::new(descriptor));
        Ok(self)
    }

    pub fn descriptor(&self, name: &str) -> Option<Arc<EntityDescriptor>> {
        self.entities.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entities.keys().copied()
    }
}
