//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 JSON 표현과 엔티티 ↔ DTO 매퍼를 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **camelCase JSON**: 모든 DTO는 `#[serde(rename_all = "camelCase")]`를 사용합니다.
//! - **서버 소유 필드 무시**: `id`, `version`, 생성/수정 시각은 응답에만 의미가 있으며,
//!   요청 본문에 들어 있어도 매퍼가 사용하지 않습니다.
//! - **검증**: `validator` derive로 제약을 선언하고, 핸들러가 서비스 호출 전에 `validate()`를 실행합니다.
//!   실패는 [`AppError::FieldValidation`](crate::core::errors::AppError::FieldValidation)으로 변환되어
//!   `[{"beerName": "size must be between 0 and 50"}]` 형식의 400 응답이 됩니다.
//! - **변환**: Entity → DTO는 `From`, DTO → Entity는 필수 필드 누락이 가능하므로 `TryFrom`
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── beers/          # BeerDto, 목록 조회 쿼리
//! ├── customers/      # CustomerDto
//! ├── categories/     # CategoryDto
//! ├── orders/         # BeerOrderDto, 라인, 배송
//! ├── auth/           # 토큰 발급 응답
//! └── page.rs         # PageRequest, Page<T>
//! ```

use chrono::{DateTime, Utc};
use validator::ValidationError;

pub mod beers;
pub mod customers;
pub mod categories;
pub mod orders;
pub mod auth;
pub mod page;

pub use beers::*;
pub use customers::*;
pub use categories::*;
pub use orders::*;
pub use auth::*;
pub use page::*;

/// 공백만 있는 문자열을 거부합니다.
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// BSON 시각을 응답용 UTC 시각으로 변환합니다.
pub(crate) fn to_utc(value: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// 엔티티의 문자열 ID를 응답용 UUID로 변환합니다.
pub(crate) fn to_uuid(id: &str) -> Option<uuid::Uuid> {
    uuid::Uuid::parse_str(id).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Lager").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_to_utc_keeps_millis() {
        let now = mongodb::bson::DateTime::now();
        assert_eq!(to_utc(now).timestamp_millis(), now.timestamp_millis());
    }
}
