use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_major_table::Major, m20260105_000003_create_class_table::Class,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_uniq(Student::Nisn))
                    .col(string(Student::Name))
                    .col(integer_null(Student::ClassId))
                    .col(integer(Student::MajorId))
                    .col(integer(Student::Semester))
                    .col(integer(Student::GradeLevel))
                    .col(boolean(Student::IsActive))
                    .col(timestamp_with_time_zone(Student::CreatedAt))
                    .col(timestamp_with_time_zone(Student::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_class_id")
                            .from(Student::Table, Student::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_major_id")
                            .from(Student::Table, Student::MajorId)
                            .to(Major::Table, Major::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Nisn,
    Name,
    ClassId,
    MajorId,
    Semester,
    GradeLevel,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
