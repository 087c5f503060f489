//! Gallery item domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::gallery::{
        CreateGalleryItemDto, GalleryItemDto, PaginatedGalleryItemsDto, UpdateGalleryItemDto,
    },
    server::error::AppError,
};

/// Gallery category, stored lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCategory {
    Facility,
    Activity,
    Achievement,
}

impl GalleryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Facility => "facility",
            GalleryCategory::Activity => "activity",
            GalleryCategory::Achievement => "achievement",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "facility" => Some(Self::Facility),
            "activity" => Some(Self::Activity),
            "achievement" => Some(Self::Achievement),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryItem {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GalleryItem {
    pub fn from_entity(entity: entity::gallery_item::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            image_url: entity.image_url,
            category: entity.category,
            is_published: entity.is_published,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GalleryItemDto {
        GalleryItemDto {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            is_published: self.is_published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGalleryItemParams {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub is_published: bool,
}

impl CreateGalleryItemParams {
    pub fn from_dto(dto: CreateGalleryItemDto) -> Result<Self, AppError> {
        let category = validate_fields(&dto.title, &dto.image_url, &dto.category)?;

        Ok(Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            image_url: dto.image_url,
            category: category.as_str().to_string(),
            is_published: dto.is_published,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGalleryItemParams {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: String,
    pub is_published: bool,
}

impl UpdateGalleryItemParams {
    pub fn from_dto(id: i32, dto: UpdateGalleryItemDto) -> Result<Self, AppError> {
        let category = validate_fields(&dto.title, &dto.image_url, &dto.category)?;

        Ok(Self {
            id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            image_url: dto.image_url,
            category: category.as_str().to_string(),
            is_published: dto.is_published,
        })
    }
}

fn validate_fields(
    title: &str,
    image_url: &str,
    category: &str,
) -> Result<GalleryCategory, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if image_url.trim().is_empty() {
        return Err(AppError::BadRequest("image_url is required".to_string()));
    }

    GalleryCategory::parse(category)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid category '{}'", category)))
}

#[derive(Debug, Clone)]
pub struct PaginatedGalleryItems {
    pub items: Vec<GalleryItem>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedGalleryItems {
    pub fn into_dto(self) -> PaginatedGalleryItemsDto {
        PaginatedGalleryItemsDto {
            items: self.items.into_iter().map(|i| i.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
