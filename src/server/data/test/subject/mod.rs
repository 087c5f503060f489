use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::subject::SubjectRepository, model::subject::CreateSubjectParams};

mod create;
