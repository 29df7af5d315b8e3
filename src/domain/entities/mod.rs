//! # Domain Entities Module
//!
//! MongoDB에 저장되는 영속 엔티티들입니다.
//!
//! ## 공통 규칙
//!
//! - `_id`는 생성 시 한 번 할당되는 하이픈 포함 UUID 문자열이며 이후 변경되지 않습니다.
//! - `version`은 낙관적 잠금 카운터로, 저장될 때마다 1씩 증가합니다.
//! - `created_date` / `update_date`는 BSON `DateTime`으로 저장됩니다.
//! - 양방향 연관관계는 ID 목록으로 표현하며, 엔티티의 헬퍼 메서드가 양쪽을 함께 갱신합니다.
//!
//! ```text
//! Beer ◄──── N:M ────► Category        (category_ids / beer_ids)
//! Beer ◄──── 1:N ───── BeerOrderLine   (beer_id)
//! Customer ◄─ 1:N ──── BeerOrder       (beer_order_ids / customer_id)
//! BeerOrder ── 1:N ──► BeerOrderLine   (내장 문서)
//! BeerOrder ── 1:1 ──► BeerOrderShipment (내장 문서)
//! ```
//!
//! ## 모듈 구성
//!
//! - [`beers`] - 맥주, 맥주 스타일, 카테고리
//! - [`customers`] - 고객
//! - [`orders`] - 맥주 주문, 주문 라인, 배송 정보

use mongodb::bson::DateTime;

pub mod beers;
pub mod customers;
pub mod orders;

pub use beers::*;
pub use customers::*;
pub use orders::*;

/// 낙관적 잠금으로 저장되는 엔티티
///
/// 리포지토리는 `{_id, version}` 조건으로 문서를 교체하며,
/// 교체 직전에 [`Versioned::advance_version`]으로 버전과 수정 시각을 갱신합니다.
pub trait Versioned {
    fn id(&self) -> &str;

    fn version(&self) -> i32;

    /// 버전을 1 올리고 수정 시각을 갱신한 뒤, 저장소에 있어야 할 이전 버전을 돌려줍니다.
    fn advance_version(&mut self) -> i32;
}

/// 새 엔티티 ID (하이픈 포함 UUID v4)
pub fn new_entity_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// `Versioned` 구현 보일러플레이트
///
/// 대상 구조체는 `id: String`, `version: i32`, `update_date: DateTime` 필드를 가져야 합니다.
macro_rules! impl_versioned {
    ($entity:ty) => {
        impl $crate::domain::entities::Versioned for $entity {
            fn id(&self) -> &str {
                &self.id
            }

            fn version(&self) -> i32 {
                self.version
            }

            fn advance_version(&mut self) -> i32 {
                let expected = self.version;
                self.version += 1;
                self.update_date = mongodb::bson::DateTime::now();
                expected
            }
        }
    };
}

pub(crate) use impl_versioned;

/// ID 목록에 없을 때만 추가합니다. 추가했으면 `true`
pub(crate) fn push_unique(ids: &mut Vec<String>, id: &str) -> bool {
    if ids.iter().any(|existing| existing == id) {
        return false;
    }
    ids.push(id.to_string());
    true
}

/// 생성/수정 시각 쌍
pub(crate) fn timestamps() -> (DateTime, DateTime) {
    let now = DateTime::now();
    (now, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_id_is_hyphenated_uuid() {
        let id = new_entity_id();
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_entity_id());
    }

    #[test]
    fn test_advance_version_returns_previous_version() {
        let mut customer = Customer::new("Pan Oleg".to_string(), None);
        let created = customer.update_date;

        let expected = customer.advance_version();

        assert_eq!(expected, 0);
        assert_eq!(customer.version(), 1);
        assert!(customer.update_date >= created);
    }
}
