use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::announcement::AnnouncementRepository,
    model::announcement::{CreateAnnouncementParams, UpdateAnnouncementParams},
};

mod get_paginated;
mod publish;

fn update_params(id: i32, is_published: bool) -> UpdateAnnouncementParams {
    UpdateAnnouncementParams {
        id,
        title: "Updated title".to_string(),
        content: "Updated content".to_string(),
        category: "general".to_string(),
        priority: "normal".to_string(),
        is_published,
    }
}
