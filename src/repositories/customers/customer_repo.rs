//! # 고객 리포지토리 구현
//!
//! `customers` 컬렉션의 데이터 액세스를 담당합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::Customer,
    repositories::{replace_versioned, warn_cache_error, CACHE_TTL_SECONDS},
};
use singleton_macro::repository;

/// 고객 데이터 액세스 리포지토리
///
/// 단건 조회는 `customer_repository:{id}` 키로 10분간 캐싱됩니다.
#[repository(name = "customer", collection = "customers")]
pub struct CustomerRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl CustomerRepository {
    /// ID로 고객 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Customer>> {
        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Customer>(&cache_key).await {
            return Ok(Some(cached));
        }

        let customer = self.collection::<Customer>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref customer) = customer {
            warn_cache_error(self.redis.set_with_expiry(&cache_key, customer, CACHE_TTL_SECONDS).await);
        }

        Ok(customer)
    }

    /// 수정 전 조회. 캐시를 거치지 않습니다.
    pub async fn find_for_update(&self, id: &str) -> AppResult<Option<Customer>> {
        self.collection::<Customer>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이름 오름차순 전체 목록
    pub async fn find_all(&self) -> AppResult<Vec<Customer>> {
        self.collection::<Customer>()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn count(&self) -> AppResult<u64> {
        self.collection::<Customer>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create(&self, customer: Customer) -> AppResult<Customer> {
        self.collection::<Customer>()
            .insert_one(&customer)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(customer)
    }

    pub async fn create_many(&self, customers: &[Customer]) -> AppResult<usize> {
        if customers.is_empty() {
            return Ok(0);
        }

        let result = self.collection::<Customer>()
            .insert_many(customers)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.inserted_ids.len())
    }

    /// 낙관적 잠금으로 고객을 교체합니다. 충돌이어도 캐시는 지웁니다.
    pub async fn update(&self, customer: &mut Customer) -> AppResult<()> {
        let result = replace_versioned(&self.collection::<Customer>(), customer).await;
        warn_cache_error(self.invalidate_cache(&customer.id).await);
        result
    }

    /// 주문 ID를 고객의 주문 목록에 추가합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 그 사이 고객이 삭제됨
    pub async fn add_order_id(&self, customer_id: &str, order_id: &str) -> AppResult<()> {
        let result = self.collection::<Customer>()
            .update_one(
                doc! { "_id": customer_id },
                doc! {
                    "$addToSet": { "beer_order_ids": order_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        warn_cache_error(self.invalidate_cache(customer_id).await);

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Customer {} not found", customer_id)));
        }
        Ok(())
    }

    /// 주문 ID를 고객의 주문 목록에서 제거합니다. 목록에 없었으면 `false`
    pub async fn remove_order_id(&self, customer_id: &str, order_id: &str) -> AppResult<bool> {
        let result = self.collection::<Customer>()
            .update_one(
                doc! { "_id": customer_id, "beer_order_ids": order_id },
                doc! {
                    "$pull": { "beer_order_ids": order_id },
                    "$inc": { "version": 1 },
                    "$currentDate": { "update_date": true },
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        warn_cache_error(self.invalidate_cache(customer_id).await);
        Ok(result.modified_count > 0)
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection::<Customer>()
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
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        self.collection::<Customer>()
            .create_index(name_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
