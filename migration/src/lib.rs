pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_major_table;
mod m20260105_000002_create_teacher_table;
mod m20260105_000003_create_class_table;
mod m20260105_000004_create_subject_table;
mod m20260105_000005_create_student_table;
mod m20260106_000006_create_schedule_table;
mod m20260106_000007_create_grade_table;
mod m20260106_000008_create_announcement_table;
mod m20260106_000009_create_news_table;
mod m20260106_000010_create_gallery_item_table;
mod m20260107_000011_create_staff_table;
mod m20260107_000012_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_major_table::Migration),
            Box::new(m20260105_000002_create_teacher_table::Migration),
            Box::new(m20260105_000003_create_class_table::Migration),
            Box::new(m20260105_000004_create_subject_table::Migration),
            Box::new(m20260105_000005_create_student_table::Migration),
            Box::new(m20260106_000006_create_schedule_table::Migration),
            Box::new(m20260106_000007_create_grade_table::Migration),
            Box::new(m20260106_000008_create_announcement_table::Migration),
            Box::new(m20260106_000009_create_news_table::Migration),
            Box::new(m20260106_000010_create_gallery_item_table::Migration),
            Box::new(m20260107_000011_create_staff_table::Migration),
            Box::new(m20260107_000012_create_user_table::Migration),
        ]
    }
}
