use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::staff::StaffRepository;

mod headmaster;
mod organization;
