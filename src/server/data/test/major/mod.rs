use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::major::MajorRepository,
    model::major::{CreateMajorParams, UpdateMajorParams},
};

mod create;
mod delete;
mod get_paginated;
mod update;

/// Builds create parameters with sensible test defaults.
fn create_params(name: &str, code: &str) -> CreateMajorParams {
    CreateMajorParams {
        name: name.to_string(),
        code: code.to_string(),
        description: "A test major".to_string(),
        image_url: None,
        facilities: vec![],
        career_prospects: vec![],
        total_students: 0,
        is_active: true,
    }
}
