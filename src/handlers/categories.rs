//! # Category HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/categories` | 전체 목록 | 200 |
//! | `GET` | `/api/v1/categories/{categoryId}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/v1/categories` | 생성 | 201 / 400 |

use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::CategoryDto;
use crate::handlers::created_at;
use crate::services::beers::CategoryService;

pub const CATEGORY_PATH: &str = "/api/v1/categories";

#[get("")]
pub async fn list_categories() -> Result<HttpResponse, AppError> {
    let categories = CategoryService::instance().list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/{category_id}")]
pub async fn get_category(
    category_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let category = CategoryService::instance()
        .get_category(category_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(category))
}

#[post("")]
pub async fn create_category(
    payload: web::Json<CategoryDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let created = CategoryService::instance()
        .create_category(payload.into_inner())
        .await?;
    Ok(created_at(CATEGORY_PATH, created.id, &created))
}
