use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryItem::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryItem::Id))
                    .col(string(GalleryItem::Title))
                    .col(string_null(GalleryItem::Description))
                    .col(string(GalleryItem::ImageUrl))
                    .col(string(GalleryItem::Category))
                    .col(boolean(GalleryItem::IsPublished))
                    .col(timestamp_with_time_zone_null(GalleryItem::PublishedAt))
                    .col(timestamp_with_time_zone(GalleryItem::CreatedAt))
                    .col(timestamp_with_time_zone(GalleryItem::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryItem {
    #[sea_orm(iden = "gallery_items")]
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Category,
    IsPublished,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
