use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Announcement::Table)
                    .if_not_exists()
                    .col(pk_auto(Announcement::Id))
                    .col(string(Announcement::Title))
                    .col(text(Announcement::Content))
                    .col(string(Announcement::Category))
                    .col(string(Announcement::Priority))
                    .col(boolean(Announcement::IsPublished))
                    .col(timestamp_with_time_zone_null(Announcement::PublishedAt))
                    .col(timestamp_with_time_zone(Announcement::CreatedAt))
                    .col(timestamp_with_time_zone(Announcement::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Announcement {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Content,
    Category,
    Priority,
    IsPublished,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
