//! 카테고리 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::Category,
};
use singleton_macro::repository;

/// 카테고리 데이터 액세스 리포지토리 (`categories` 컬렉션)
///
/// 카테고리는 자주 바뀌지 않고 개수도 적어 캐싱하지 않습니다.
#[repository(name = "category", collection = "categories")]
pub struct CategoryRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl CategoryRepository {
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Category>> {
        self.collection::<Category>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 설명 오름차순 전체 목록
    pub async fn find_all(&self) -> AppResult<Vec<Category>> {
        self.collection::<Category>()
            .find(doc! {})
            .sort(doc! { "description": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create(&self, category: Category) -> AppResult<Category> {
        self.collection::<Category>()
            .insert_one(&category)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(category)
    }

    /// 맥주 ID를 추가합니다. 이미 있으면 `false`이고 버전도 그대로입니다.
    pub async fn add_beer_id(&self, category_id: &str, beer_id: &str) -> AppResult<bool> {
        let result = self.collection::<Category>()
            .update_one(
                doc! { "_id": category_id, "beer_ids": { "$ne": beer_id } },
                doc! {
                    "$addToSet": { "beer_ids": beer_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 맥주 ID를 제거합니다. 없었으면 `false`
    pub async fn remove_beer_id(&self, category_id: &str, beer_id: &str) -> AppResult<bool> {
        let result = self.collection::<Category>()
            .update_one(
                doc! { "_id": category_id, "beer_ids": beer_id },
                doc! {
                    "$pull": { "beer_ids": beer_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 삭제된 맥주의 ID를 모든 카테고리에서 제거합니다. 수정된 카테고리 수를 돌려줍니다.
    pub async fn remove_beer_everywhere(&self, beer_id: &str) -> AppResult<u64> {
        let result = self.collection::<Category>()
            .update_many(
                doc! { "beer_ids": beer_id },
                doc! {
                    "$pull": { "beer_ids": beer_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count)
    }
}
