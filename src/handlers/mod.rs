//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, Postman, 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 공통 규칙
//!
//! | 동작 | 성공 응답 |
//! |------|-----------|
//! | 목록/단건 조회 | 200 + JSON |
//! | 생성 (`POST`) | 201 + `Location` 헤더 + JSON |
//! | 수정 (`PUT`/`PATCH`), 삭제 (`DELETE`) | 200, 빈 본문 |
//!
//! - 생성과 전체 수정 요청 본문은 서비스 호출 전에 `validate()`로 검증합니다.
//! - 경로의 ID는 `web::Path<Uuid>`로 받습니다. UUID 형식이 아니면 존재할 수 없는
//!   리소스이므로 actix 기본 동작대로 404가 됩니다.
//! - 에러는 [`AppError`](crate::core::errors::AppError)가 HTTP 응답으로 변환합니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_beer(payload: web::Json<BeerDto>) -> Result<HttpResponse, AppError> {
//!     payload.validate()?;
//!     let created = BeerService::instance().create_beer(payload.into_inner()).await?;
//!     Ok(created_at(BEER_PATH, created.id, &created))
//! }
//! ```

use actix_web::http::header;
use actix_web::HttpResponse;
use serde::Serialize;
use uuid::Uuid;

pub mod beers;
pub mod categories;
pub mod customers;
pub mod orders;
pub mod auth;

/// `201 Created` + `Location: {base_path}/{id}`
pub(crate) fn created_at<T: Serialize>(base_path: &str, id: Option<Uuid>, body: &T) -> HttpResponse {
    let mut response = HttpResponse::Created();
    if let Some(id) = id {
        response.insert_header((header::LOCATION, format!("{}/{}", base_path, id)));
    }
    response.json(body)
}
