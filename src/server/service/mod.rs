//! Business logic layer between controllers and repositories.
//!
//! Services own the rules that span more than one query: dependency-count
//! delete guards, the transactional schedule conflict check, bulk student
//! mutations, the single-active-headmaster invariant and credential checks.

pub mod announcement;
pub mod auth;
pub mod class;
pub mod gallery;
pub mod grade;
pub mod major;
pub mod news;
pub mod schedule;
pub mod staff;
pub mod student;
pub mod subject;
pub mod teacher;

#[cfg(test)]
mod test;

/// Computes the page count for a paginated listing.
pub(crate) fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
