//! # Beer HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/beer` | 목록 (필터, 페이징) | 200 |
//! | `GET` | `/api/v1/beer/{beerId}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/v1/beer` | 생성 | 201 / 400 |
//! | `PUT` | `/api/v1/beer/{beerId}` | 전체 수정 | 200 / 400 / 404 / 409 |
//! | `PATCH` | `/api/v1/beer/{beerId}` | 부분 수정 | 200 / 400 / 404 / 409 |
//! | `DELETE` | `/api/v1/beer/{beerId}` | 삭제 (주문이 참조하면 409) | 200 / 404 / 409 |
//! | `PUT` | `/api/v1/beer/{beerId}/categories/{categoryId}` | 카테고리 연결 | 200 / 404 |
//! | `DELETE` | `/api/v1/beer/{beerId}/categories/{categoryId}` | 카테고리 연결 해제 | 200 / 404 |

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::{BeerDto, BeerListQuery};
use crate::handlers::created_at;
use crate::services::beers::BeerService;

pub const BEER_PATH: &str = "/api/v1/beer";

/// `GET /api/v1/beer?beerName=&beerStyle=&showInventory=&pageNumber=&pageSize=`
#[get("")]
pub async fn list_beers(
    query: web::Query<BeerListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = BeerService::instance().list_beers(&query).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/{beer_id}")]
pub async fn get_beer(
    beer_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let beer = BeerService::instance().get_beer(beer_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(beer))
}

#[post("")]
pub async fn create_beer(
    payload: web::Json<BeerDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let created = BeerService::instance().create_beer(payload.into_inner()).await?;
    Ok(created_at(BEER_PATH, created.id, &created))
}

#[put("/{beer_id}")]
pub async fn update_beer(
    beer_id: web::Path<Uuid>,
    payload: web::Json<BeerDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    BeerService::instance()
        .update_beer(beer_id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

/// 값이 있는 필드만 반영하므로 요청 본문 자체는 검증하지 않습니다.
#[patch("/{beer_id}")]
pub async fn patch_beer(
    beer_id: web::Path<Uuid>,
    payload: web::Json<BeerDto>,
) -> Result<HttpResponse, AppError> {
    BeerService::instance()
        .patch_beer(beer_id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[delete("/{beer_id}")]
pub async fn delete_beer(
    beer_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    BeerService::instance().delete_beer(beer_id.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[put("/{beer_id}/categories/{category_id}")]
pub async fn add_beer_category(
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (beer_id, category_id) = path.into_inner();

    BeerService::instance().add_category(beer_id, category_id).await?;
    Ok(HttpResponse::Ok().finish())
}

#[delete("/{beer_id}/categories/{category_id}")]
pub async fn remove_beer_category(
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (beer_id, category_id) = path.into_inner();

    BeerService::instance().remove_category(beer_id, category_id).await?;
    Ok(HttpResponse::Ok().finish())
}
