//! 카테고리 서비스 구현

use std::sync::Arc;
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{dto::CategoryDto, entities::Category},
    repositories::beers::CategoryRepository,
};

/// 카테고리 비즈니스 로직 서비스
///
/// 맥주와의 연결은 [`BeerService::add_category`](super::BeerService::add_category)가 담당합니다.
#[service(name = "category")]
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    pub async fn list_categories(&self) -> AppResult<Vec<CategoryDto>> {
        let categories = self.category_repo.find_all().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn get_category(&self, id: Uuid) -> AppResult<CategoryDto> {
        let id = id.to_string();
        self.category_repo
            .find_by_id(&id)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn create_category(&self, dto: CategoryDto) -> AppResult<CategoryDto> {
        let category = Category::try_from(dto)?;
        let created = self.category_repo.create(category).await?;

        log::info!("🏷️ 카테고리 생성: {} ({})", created.description, created.id);

        Ok(CategoryDto::from(created))
    }
}
