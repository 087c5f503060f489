use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000004_create_subject_table::Subject, m20260105_000005_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grade::Table)
                    .if_not_exists()
                    .col(pk_auto(Grade::Id))
                    .col(integer(Grade::StudentId))
                    .col(integer(Grade::SubjectId))
                    .col(integer(Grade::Semester))
                    .col(double(Grade::Score))
                    .col(string_null(Grade::Notes))
                    .col(timestamp_with_time_zone(Grade::CreatedAt))
                    .col(timestamp_with_time_zone(Grade::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_student_id")
                            .from(Grade::Table, Grade::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grade_subject_id")
                            .from(Grade::Table, Grade::SubjectId)
                            .to(Subject::Table, Subject::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Grade {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    SubjectId,
    Semester,
    Score,
    Notes,
    CreatedAt,
    UpdatedAt,
}
