//! SeaORM entity definitions for the schoolboard database schema.
//!
//! One module per table. Entities stay free of business logic; conversion to
//! domain models happens in the application's repository layer.

pub mod prelude;

pub mod announcement;
pub mod class;
pub mod gallery_item;
pub mod grade;
pub mod major;
pub mod news;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;
