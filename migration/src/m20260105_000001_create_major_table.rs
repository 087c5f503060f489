use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Major::Table)
                    .if_not_exists()
                    .col(pk_auto(Major::Id))
                    .col(string(Major::Name))
                    .col(string_uniq(Major::Code))
                    .col(string(Major::Description))
                    .col(string_null(Major::ImageUrl))
                    .col(json(Major::Facilities))
                    .col(json(Major::CareerProspects))
                    .col(integer(Major::TotalStudents))
                    .col(boolean(Major::IsActive))
                    .col(timestamp_with_time_zone(Major::CreatedAt))
                    .col(timestamp_with_time_zone(Major::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Major::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Major {
    #[sea_orm(iden = "majors")]
    Table,
    Id,
    Name,
    Code,
    Description,
    ImageUrl,
    Facilities,
    CareerProspects,
    TotalStudents,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
