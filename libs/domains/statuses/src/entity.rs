use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the status table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Board column rank; neither unique nor dense
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl database::IdEntity for Entity {
    fn id_column() -> Column {
        Column::Id
    }
}
