//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 리포지토리들을 제공합니다.
//! MongoDB를 주 저장소로 사용하고, 단건 조회는 Redis에 캐싱합니다.
//!
//! # 저장 규칙
//!
//! - 모든 수정은 `{_id, version}` 조건의 문서 교체로 수행되며 버전이 1 증가합니다.
//!   조건이 맞지 않는데 문서가 존재하면 다른 요청이 먼저 수정한 것이므로 `ConflictError`입니다.
//! - 캐시 키는 `{name}_repository:{id}`, TTL은 [`CACHE_TTL_SECONDS`]입니다.
//!   수정 시도(충돌 포함)와 삭제 시 해당 키를 무효화하며, 캐시 오류는 요청을 실패시키지 않습니다.
//! - 수정할 엔티티는 캐시를 거치지 않고 `find_for_update`로 읽습니다.
//!   캐시에 남은 이전 버전으로 교체를 시도하면 매번 충돌하기 때문입니다.
//! - 반대편 ID 목록(카테고리의 `beer_ids`, 고객의 `beer_order_ids`)은
//!   `$addToSet`/`$pull` 단일 문서 연산으로 갱신하므로 동시 요청과 충돌하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::beers::BeerRepository;
//!
//! let beer_repo = BeerRepository::instance();
//! let beer = beer_repo.find_by_id(&beer_id).await?;
//! ```

use mongodb::bson::doc;
use mongodb::Collection;
use serde::Serialize;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::Versioned;

pub mod beers;
pub mod customers;
pub mod orders;

/// 단건 조회 캐시 유지 시간 (10분)
pub const CACHE_TTL_SECONDS: usize = 600;

/// 캐시 오류는 요청을 실패시키지 않고 경고만 남깁니다.
pub(crate) fn warn_cache_error<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(e) = result {
        log::warn!("⚠️ {}", AppError::RedisError(e.to_string()));
    }
}

/// 낙관적 잠금으로 엔티티를 교체합니다.
///
/// 성공하면 `entity`는 저장된 버전과 같아집니다.
/// 문서가 없으면 `NotFound`, 버전이 맞지 않으면 `ConflictError`입니다.
pub(crate) async fn replace_versioned<T>(collection: &Collection<T>, entity: &mut T) -> AppResult<()>
where
    T: Versioned + Serialize + Send + Sync,
{
    let expected_version = entity.advance_version();
    let id = entity.id().to_string();

    let result = collection
        .replace_one(doc! { "_id": id.as_str(), "version": expected_version }, &*entity)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.matched_count == 1 {
        return Ok(());
    }

    let exists = collection
        .count_documents(doc! { "_id": id.as_str() })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        > 0;

    if exists {
        log::warn!("⚠️ 버전 충돌: {} (기대 버전 {})", id, expected_version);
        Err(AppError::ConflictError(format!(
            "{} was modified by another request (expected version {})",
            id, expected_version
        )))
    } else {
        Err(AppError::NotFound(format!("{} not found", id)))
    }
}
