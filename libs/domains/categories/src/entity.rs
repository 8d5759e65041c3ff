use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the category table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl database::IdEntity for Entity {
    fn id_column() -> Column {
        Column::Id
    }
}
