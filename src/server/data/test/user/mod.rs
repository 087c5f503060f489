use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::user::UserRepository, model::user::CreateUserParams};

mod accounts;
