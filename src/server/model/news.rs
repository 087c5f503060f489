//! News article domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::news::{CreateNewsDto, NewsDto, PaginatedNewsDto, UpdateNewsDto},
    server::error::AppError,
};

/// News category, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsCategory {
    Achievement,
    Activity,
    Information,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Achievement => "achievement",
            NewsCategory::Activity => "activity",
            NewsCategory::Information => "information",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "achievement" => Some(Self::Achievement),
            "activity" => Some(Self::Activity),
            "information" => Some(Self::Information),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            excerpt: entity.excerpt,
            category: entity.category,
            image_url: entity.image_url,
            is_published: entity.is_published,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            category: self.category,
            image_url: self.image_url,
            is_published: self.is_published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsParams {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl CreateNewsParams {
    pub fn from_dto(dto: CreateNewsDto) -> Result<Self, AppError> {
        let category = validate_fields(&dto.title, &dto.content, &dto.excerpt, &dto.category)?;

        Ok(Self {
            title: dto.title.trim().to_string(),
            content: dto.content,
            excerpt: dto.excerpt,
            category: category.as_str().to_string(),
            image_url: dto.image_url,
            is_published: dto.is_published,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateNewsParams {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl UpdateNewsParams {
    pub fn from_dto(id: i32, dto: UpdateNewsDto) -> Result<Self, AppError> {
        let category = validate_fields(&dto.title, &dto.content, &dto.excerpt, &dto.category)?;

        Ok(Self {
            id,
            title: dto.title.trim().to_string(),
            content: dto.content,
            excerpt: dto.excerpt,
            category: category.as_str().to_string(),
            image_url: dto.image_url,
            is_published: dto.is_published,
        })
    }
}

fn validate_fields(
    title: &str,
    content: &str,
    excerpt: &str,
    category: &str,
) -> Result<NewsCategory, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if content.trim().is_empty() {
        return Err(AppError::BadRequest("content is required".to_string()));
    }
    if excerpt.trim().is_empty() {
        return Err(AppError::BadRequest("excerpt is required".to_string()));
    }

    NewsCategory::parse(category)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid category '{}'", category)))
}

#[derive(Debug, Clone)]
pub struct PaginatedNews {
    pub news: Vec<News>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedNews {
    pub fn into_dto(self) -> PaginatedNewsDto {
        PaginatedNewsDto {
            news: self.news.into_iter().map(|n| n.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
