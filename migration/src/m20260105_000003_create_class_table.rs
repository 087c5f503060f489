use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_major_table::Major, m20260105_000002_create_teacher_table::Teacher,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(string_uniq(Class::Name))
                    .col(integer(Class::MajorId))
                    .col(integer_null(Class::HomeroomTeacherId))
                    .col(integer(Class::GradeLevel))
                    .col(boolean(Class::IsActive))
                    .col(timestamp_with_time_zone(Class::CreatedAt))
                    .col(timestamp_with_time_zone(Class::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_major_id")
                            .from(Class::Table, Class::MajorId)
                            .to(Major::Table, Major::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_homeroom_teacher_id")
                            .from(Class::Table, Class::HomeroomTeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    MajorId,
    HomeroomTeacherId,
    GradeLevel,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
