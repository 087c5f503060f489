//! Announcement domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::announcement::{
        AnnouncementDto, CreateAnnouncementDto, PaginatedAnnouncementsDto, UpdateAnnouncementDto,
    },
    server::error::AppError,
};

/// Announcement category, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementCategory {
    General,
    Academic,
    Exam,
    Event,
}

impl AnnouncementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementCategory::General => "general",
            AnnouncementCategory::Academic => "academic",
            AnnouncementCategory::Exam => "exam",
            AnnouncementCategory::Event => "event",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "general" => Some(Self::General),
            "academic" => Some(Self::Academic),
            "exam" => Some(Self::Exam),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

/// Announcement priority, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementPriority {
    Normal,
    Important,
    Urgent,
}

impl AnnouncementPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnouncementPriority::Normal => "normal",
            AnnouncementPriority::Important => "important",
            AnnouncementPriority::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(Self::Normal),
            "important" => Some(Self::Important),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            category: entity.category,
            priority: entity.priority,
            is_published: entity.is_published,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            content: self.content,
            category: self.category,
            priority: self.priority,
            is_published: self.is_published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnnouncementParams {
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: String,
    pub is_published: bool,
}

impl CreateAnnouncementParams {
    pub fn from_dto(dto: CreateAnnouncementDto) -> Result<Self, AppError> {
        let (category, priority) =
            validate_fields(&dto.title, &dto.content, &dto.category, &dto.priority)?;

        Ok(Self {
            title: dto.title.trim().to_string(),
            content: dto.content,
            category: category.as_str().to_string(),
            priority: priority.as_str().to_string(),
            is_published: dto.is_published,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAnnouncementParams {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: String,
    pub is_published: bool,
}

impl UpdateAnnouncementParams {
    pub fn from_dto(id: i32, dto: UpdateAnnouncementDto) -> Result<Self, AppError> {
        let (category, priority) =
            validate_fields(&dto.title, &dto.content, &dto.category, &dto.priority)?;

        Ok(Self {
            id,
            title: dto.title.trim().to_string(),
            content: dto.content,
            category: category.as_str().to_string(),
            priority: priority.as_str().to_string(),
            is_published: dto.is_published,
        })
    }
}

fn validate_fields(
    title: &str,
    content: &str,
    category: &str,
    priority: &str,
) -> Result<(AnnouncementCategory, AnnouncementPriority), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("content is required".to_string()));
    }

    let category = AnnouncementCategory::parse(category)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid category '{}'", category)))?;
    let priority = AnnouncementPriority::parse(priority)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid priority '{}'", priority)))?;

    Ok((category, priority))
}

#[derive(Debug, Clone)]
pub struct PaginatedAnnouncements {
    pub announcements: Vec<Announcement>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedAnnouncements {
    pub fn into_dto(self) -> PaginatedAnnouncementsDto {
        PaginatedAnnouncementsDto {
            announcements: self
                .announcements
                .into_iter()
                .map(|a| a.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
