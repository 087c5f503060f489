use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string(News::Title))
                    .col(text(News::Content))
                    .col(string(News::Excerpt))
                    .col(string(News::Category))
                    .col(string_null(News::ImageUrl))
                    .col(boolean(News::IsPublished))
                    .col(timestamp_with_time_zone_null(News::PublishedAt))
                    .col(timestamp_with_time_zone(News::CreatedAt))
                    .col(timestamp_with_time_zone(News::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum News {
    #[sea_orm(iden = "news")]
    Table,
    Id,
    Title,
    Content,
    Excerpt,
    Category,
    ImageUrl,
    IsPublished,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
