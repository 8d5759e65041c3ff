//! Minimal entity used by this crate's unit tests.

use crate::registry::SearchableField;
use std::cell::RefCell;

thread_local! {
    static SEARCHABLE_OVERRIDE: RefCell<Option<Vec<SearchableField>>> = const { RefCell::new(None) };
}

/// Runs `f` with `note` reporting `fields` as its searchable fields.
pub fn with_searchable<R>(fields: Vec<SearchableField>, f: impl FnOnce() -> R) -> R {
    SEARCHABLE_OVERRIDE.with(|cell| *cell.borrow_mut() = Some(fields));
    let result = f();
    SEARCHABLE_OVERRIDE.with(|cell| *cell.borrow_mut() = None);
    result
}

pub mod note {
    use super::SEARCHABLE_OVERRIDE;
    use crate::entity::CrudEntity;
    use crate::patch::{nullable, set_if_present};
    use crate::registry::{MatchStrategy, SearchableField};
    use async_trait::async_trait;
    use database::IdEntity;
    use sea_orm::ActiveValue::{NotSet, Set};
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};
    use utoipa::ToSchema;
    use validator::Validate;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "note")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub title: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub body: Option<String>,
        #[sea_orm(unique, nullable)]
        pub code: Option<String>,
        pub rank: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl IdEntity for Entity {
        fn id_column() -> Column {
            Column::Id
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
    pub struct Note {
        pub id: i32,
        pub title: String,
        pub body: Option<String>,
        pub code: Option<String>,
        pub rank: i32,
    }

    impl From<Model> for Note {
        fn from(m: Model) -> Self {
            Self {
                id: m.id,
                title: m.title,
                body: m.body,
                code: m.code,
                rank: m.rank,
            }
        }
    }

    #[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
    pub struct CreateNote {
        #[validate(length(min = 1))]
        pub title: String,
        pub body: Option<String>,
        pub code: Option<String>,
        #[serde(default)]
        pub rank: i32,
    }

    #[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
    pub struct UpdateNote {
        #[validate(length(min = 1))]
        pub title: Option<String>,
        #[serde(default, deserialize_with = "nullable")]
        #[schema(value_type = Option<String>)]
        pub body: Option<Option<String>>,
        pub rank: Option<i32>,
    }

    #[async_trait]
    impl CrudEntity for Entity {
        const NAME: &'static str = "note";
        const LABEL: &'static str = "Note";

        type Active = ActiveModel;
        type Dto = Note;
        type Create = CreateNote;
        type Update = UpdateNote;

        fn searchable_fields() -> Vec<SearchableField> {
            SEARCHABLE_OVERRIDE.with(|cell| cell.borrow().clone()).unwrap_or_else(|| {
                vec![
                    SearchableField::partial("body", 1),
                    SearchableField::partial("title", 3),
                    SearchableField::new("code", MatchStrategy::Exact, 1),
                ]
            })
        }

        fn new_active(input: CreateNote) -> ActiveModel {
            ActiveModel {
                id: NotSet,
                title: Set(input.title),
                body: Set(input.body),
                code: Set(input.code),
                rank: Set(input.rank),
            }
        }

        fn patch_active(input: UpdateNote) -> ActiveModel {
            ActiveModel {
                title: set_if_present(input.title),
                body: set_if_present(input.body),
                rank: set_if_present(input.rank),
                ..Default::default()
            }
        }
    }
}
