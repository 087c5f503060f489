use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(string(Staff::Name))
                    .col(string(Staff::Role))
                    .col(string(Staff::Position))
                    .col(string_null(Staff::ImageUrl))
                    .col(integer(Staff::DisplayOrder))
                    .col(boolean(Staff::IsActive))
                    .col(timestamp_with_time_zone(Staff::CreatedAt))
                    .col(timestamp_with_time_zone(Staff::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Staff {
    #[sea_orm(iden = "staff")]
    Table,
    Id,
    Name,
    Role,
    Position,
    ImageUrl,
    DisplayOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
