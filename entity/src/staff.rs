//! Staff member entity for the public organization chart.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// One of: headmaster, vice_headmaster_curriculum,
    /// vice_headmaster_students, teacher, administration, support.
    /// At most one active row may carry the headmaster role.
    pub role: String,
    /// Display title, e.g. "Head of Computer Lab".
    pub position: String,
    pub image_url: Option<String>,
    /// Sort key within the role group on the organization page.
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
