pub use super::announcement::Entity as Announcement;
pub use super::class::Entity as Class;
pub use super::gallery_item::Entity as GalleryItem;
pub use super::grade::Entity as Grade;
pub use super::major::Entity as Major;
pub use super::news::Entity as News;
pub use super::schedule::Entity as Schedule;
pub use super::staff::Entity as Staff;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
pub use super::teacher::Entity as Teacher;
pub use super::user::Entity as User;
