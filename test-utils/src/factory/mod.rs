//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically generate unique codes and
//! identification numbers, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let major = factory::major::create_major(&db).await?;
//!     let teacher = factory::teacher::create_teacher(&db).await?;
//!
//!     // Create a full roster in one call
//!     let (major, teacher, class, subject, student) =
//!         factory::helpers::create_roster(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let major = factory::major::MajorFactory::new(&db)
//!     .name("Software Engineering")
//!     .code("SE")
//!     .build()
//!     .await?;
//! ```

pub mod announcement;
pub mod class;
pub mod gallery_item;
pub mod grade;
pub mod helpers;
pub mod major;
pub mod news;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use announcement::create_announcement;
pub use class::create_class;
pub use gallery_item::create_gallery_item;
pub use grade::create_grade;
pub use major::create_major;
pub use news::create_news;
pub use schedule::create_schedule;
pub use staff::create_staff;
pub use student::create_student;
pub use subject::create_subject;
pub use teacher::create_teacher;
pub use user::create_user;
