//! # 맥주 리포지토리 구현
//!
//! `beers` 컬렉션의 데이터 액세스를 담당합니다.
//! 단건 조회는 Redis cache-aside, 목록 조회는 MongoDB 필터 + 정렬 + skip/limit로 처리합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{Collation, CollationStrength, IndexOptions},
    IndexModel,
};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::dto::PageRequest,
    domain::entities::{Beer, BeerStyle},
    repositories::{replace_versioned, warn_cache_error, CACHE_TTL_SECONDS},
};
use singleton_macro::repository;

/// 맥주 목록 필터 문서를 만듭니다.
///
/// - 이름: 대소문자를 무시한 부분 일치 (입력은 정규식 메타문자가 이스케이프됨)
/// - 스타일: 정확히 일치
/// - 둘 다 주어지면 두 조건을 모두 만족해야 합니다.
pub fn beer_filter(beer_name: Option<&str>, beer_style: Option<BeerStyle>) -> Document {
    let mut filter = Document::new();

    if let Some(name) = beer_name {
        filter.insert(
            "beer_name",
            doc! { "$regex": regex::escape(name), "$options": "i" },
        );
    }
    if let Some(style) = beer_style {
        filter.insert("beer_style", style.as_str());
    }

    filter
}

/// 이름 정렬용 collation. 대소문자만 다른 이름은 같은 순서로 취급합니다.
pub fn name_collation() -> Collation {
    Collation::builder()
        .locale("en".to_string())
        .strength(CollationStrength::Secondary)
        .build()
}

/// 맥주 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `beer_repository:{id}` (매크로의 `cache_key()`)
/// - **TTL**: 10분
/// - **무효화**: 수정, 삭제 시
///
/// ## 인덱스
///
/// `beer_name`(목록 정렬 및 이름 검색), `beer_style`(스타일 필터)
#[repository(name = "beer", collection = "beers")]
pub struct BeerRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl BeerRepository {
    /// ID로 맥주 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Beer>> {
        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Beer>(&cache_key).await {
            return Ok(Some(cached));
        }

        let beer = self.collection::<Beer>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref beer) = beer {
            warn_cache_error(self.redis.set_with_expiry(&cache_key, beer, CACHE_TTL_SECONDS).await);
        }

        Ok(beer)
    }

    /// 수정 전 조회. 캐시를 거치지 않고 MongoDB의 현재 버전을 읽습니다.
    pub async fn find_for_update(&self, id: &str) -> AppResult<Option<Beer>> {
        self.collection::<Beer>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 여러 ID의 맥주를 한 번에 조회합니다. 없는 ID는 결과에서 빠집니다.
    pub async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<Beer>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.collection::<Beer>()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 필터에 맞는 맥주 한 페이지와 전체 개수
    ///
    /// 결과는 대소문자를 무시한 `beer_name` 오름차순입니다.
    pub async fn find_page(&self, filter: Document, page: PageRequest) -> AppResult<(Vec<Beer>, u64)> {
        let collection = self.collection::<Beer>();

        let total = collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if page.offset() >= total {
            return Ok((Vec::new(), total));
        }

        let beers: Vec<Beer> = collection
            .find(filter)
            .sort(doc! { "beer_name": 1 })
            .collation(name_collation())
            .skip(page.offset())
            .limit(page.size as i64)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((beers, total))
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.collection::<Beer>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 맥주 저장
    pub async fn create(&self, beer: Beer) -> AppResult<Beer> {
        self.collection::<Beer>()
            .insert_one(&beer)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(beer)
    }

    /// 여러 맥주를 한 번에 저장합니다. 저장한 개수를 돌려줍니다.
    pub async fn create_many(&self, beers: &[Beer]) -> AppResult<usize> {
        if beers.is_empty() {
            return Ok(0);
        }

        let result = self.collection::<Beer>()
            .insert_many(beers)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.inserted_ids.len())
    }

    /// 낙관적 잠금으로 맥주를 교체합니다.
    ///
    /// 충돌이어도 캐시를 지워 다음 조회가 저장된 버전을 보게 합니다.
    pub async fn update(&self, beer: &mut Beer) -> AppResult<()> {
        let result = replace_versioned(&self.collection::<Beer>(), beer).await;
        warn_cache_error(self.invalidate_cache(&beer.id).await);
        result
    }

    /// 카테고리 ID를 추가합니다. 이미 있으면 `false`이고 버전도 그대로입니다.
    pub async fn add_category_id(&self, beer_id: &str, category_id: &str) -> AppResult<bool> {
        let result = self.collection::<Beer>()
            .update_one(
                doc! { "_id": beer_id, "category_ids": { "$ne": category_id } },
                doc! {
                    "$addToSet": { "category_ids": category_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        warn_cache_error(self.invalidate_cache(beer_id).await);
        Ok(result.modified_count > 0)
    }

    /// 카테고리 ID를 제거합니다. 없었으면 `false`
    pub async fn remove_category_id(&self, beer_id: &str, category_id: &str) -> AppResult<bool> {
        let result = self.collection::<Beer>()
            .update_one(
                doc! { "_id": beer_id, "category_ids": category_id },
                doc! {
                    "$pull": { "category_ids": category_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        warn_cache_error(self.invalidate_cache(beer_id).await);
        Ok(result.modified_count > 0)
    }

    /// 맥주 삭제. 삭제할 문서가 없으면 `false`
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection::<Beer>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            warn_cache_error(self.invalidate_cache(id).await);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "beer_name": 1 })
            .options(IndexOptions::builder()
                .name("beer_name_ci".to_string())
                .collation(name_collation())
                .build())
            .build();

        let style_index = IndexModel::builder()
            .keys(doc! { "beer_style": 1 })
            .options(IndexOptions::builder()
                .name("beer_style".to_string())
                .build())
            .build();

        self.collection::<Beer>()
            .create_indexes([name_index, style_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_matches_everything() {
        assert_eq!(beer_filter(None, None), doc! {});
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let filter = beer_filter(Some("IPA"), None);
        assert_eq!(filter, doc! { "beer_name": { "$regex": "IPA", "$options": "i" } });
    }

    #[test]
    fn test_name_filter_escapes_regex_metacharacters() {
        let filter = beer_filter(Some("Imperial (IPA)"), None);
        let regex = filter.get_document("beer_name").unwrap().get_str("$regex").unwrap();
        assert_eq!(regex, r"Imperial \(IPA\)");
    }

    #[test]
    fn test_name_collation_ignores_case_only() {
        let collation = name_collation();
        assert_eq!(collation.locale, "en");
        assert!(matches!(collation.strength, Some(CollationStrength::Secondary)));
    }

    #[test]
    fn test_style_filter_is_exact() {
        let filter = beer_filter(None, Some(BeerStyle::PaleAle));
        assert_eq!(filter, doc! { "beer_style": "PALE_ALE" });
    }

    #[test]
    fn test_name_and_style_are_combined() {
        let filter = beer_filter(Some("ipa"), Some(BeerStyle::Ipa));
        assert_eq!(
            filter,
            doc! {
                "beer_name": { "$regex": "ipa", "$options": "i" },
                "beer_style": "IPA",
            }
        );
    }
}
