use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::student::StudentRepository;

mod bulk;
mod create;
mod delete;
mod get_paginated;
