use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string(Teacher::Name))
                    .col(string_uniq(Teacher::Nip))
                    .col(string_null(Teacher::Email))
                    .col(string_null(Teacher::Phone))
                    .col(string_null(Teacher::ImageUrl))
                    .col(boolean(Teacher::IsActive))
                    .col(timestamp_with_time_zone(Teacher::CreatedAt))
                    .col(timestamp_with_time_zone(Teacher::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
    Nip,
    Email,
    Phone,
    ImageUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
