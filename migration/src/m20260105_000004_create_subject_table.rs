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
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string(Subject::Name))
                    .col(string_uniq(Subject::Code))
                    .col(string_null(Subject::Description))
                    .col(integer(Subject::Credits))
                    .col(integer(Subject::MajorId))
                    .col(integer_null(Subject::TeacherId))
                    .col(integer(Subject::Semester))
                    .col(boolean(Subject::IsActive))
                    .col(timestamp_with_time_zone(Subject::CreatedAt))
                    .col(timestamp_with_time_zone(Subject::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_major_id")
                            .from(Subject::Table, Subject::MajorId)
                            .to(Major::Table, Major::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subject_teacher_id")
                            .from(Subject::Table, Subject::TeacherId)
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
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Code,
    Description,
    Credits,
    MajorId,
    TeacherId,
    Semester,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
