use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Status::Table)
                    .if_not_exists()
                    .col(pk_auto(Status::Id))
                    .col(string_uniq(Status::Name))
                    .col(integer(Status::Order).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string(Category::Name))
                    .to_owned(),
            )
            .await?;

        // No cascades: deleting a referenced status or category is rejected.
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(string(Task::Title))
                    .col(text_null(Task::Description))
                    .col(timestamp_with_time_zone_null(Task::DueDate))
                    .col(
                        timestamp_with_time_zone(Task::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(integer(Task::Priority).default(0))
                    .col(integer(Task::Position).default(0))
                    .col(integer_null(Task::StatusId))
                    .col(integer_null(Task::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_status_id")
                            .from(Task::Table, Task::StatusId)
                            .to(Status::Table, Status::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_category_id")
                            .from(Task::Table, Task::CategoryId)
                            .to(Category::Table, Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_task_status_position")
                    .table(Task::Table)
                    .col(Task::StatusId)
                    .col(Task::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Status::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Status {
    Table,
    Id,
    Name,
    Order,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Task {
    Table,
    Id,
    Title,
    Description,
    DueDate,
    CreatedAt,
    Priority,
    Position,
    StatusId,
    CategoryId,
}
