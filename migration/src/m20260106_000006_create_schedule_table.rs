use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_teacher_table::Teacher, m20260105_000003_create_class_table::Class,
    m20260105_000004_create_subject_table::Subject,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::SubjectId))
                    .col(integer(Schedule::TeacherId))
                    .col(integer(Schedule::ClassId))
                    .col(string(Schedule::Day))
                    .col(string(Schedule::StartTime))
                    .col(string(Schedule::EndTime))
                    .col(string(Schedule::Room))
                    .col(integer(Schedule::Semester))
                    .col(string(Schedule::Year))
                    .col(boolean(Schedule::IsActive))
                    .col(timestamp_with_time_zone(Schedule::CreatedAt))
                    .col(timestamp_with_time_zone(Schedule::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_subject_id")
                            .from(Schedule::Table, Schedule::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_teacher_id")
                            .from(Schedule::Table, Schedule::TeacherId)
                            .to(Teacher::Table, Teacher::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_class_id")
                            .from(Schedule::Table, Schedule::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The conflict check scans by class and day; keep that path indexed.
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_class_day")
                    .table(Schedule::Table)
                    .col(Schedule::ClassId)
                    .col(Schedule::Day)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_schedule_class_day")
                    .table(Schedule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    SubjectId,
    TeacherId,
    ClassId,
    Day,
    StartTime,
    EndTime,
    Room,
    Semester,
    Year,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
