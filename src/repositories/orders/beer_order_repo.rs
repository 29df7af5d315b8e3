//! # 맥주 주문 리포지토리 구현
//!
//! `beer_orders` 컬렉션의 데이터 액세스를 담당합니다.
//! 주문 라인과 배송 정보는 주문 문서에 내장되어 함께 저장됩니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::Repository,
    db::Database,
    domain::entities::BeerOrder,
    repositories::replace_versioned,
};
use singleton_macro::repository;

#[repository(name = "beerorder", collection = "beer_orders")]
pub struct BeerOrderRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl BeerOrderRepository {
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<BeerOrder>> {
        self.collection::<BeerOrder>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 생성 시각 오름차순 주문 목록. 고객 ID가 주어지면 그 고객의 주문만
    pub async fn find_all(&self, customer_id: Option<&str>) -> AppResult<Vec<BeerOrder>> {
        let filter = match customer_id {
            Some(customer_id) => doc! { "customer_id": customer_id },
            None => Document::new(),
        };

        self.collection::<BeerOrder>()
            .find(filter)
            .sort(doc! { "created_date": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn count_by_customer(&self, customer_id: &str) -> AppResult<u64> {
        self.collection::<BeerOrder>()
            .count_documents(doc! { "customer_id": customer_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이 맥주를 주문 라인에 담은 주문 수
    pub async fn count_by_beer(&self, beer_id: &str) -> AppResult<u64> {
        self.collection::<BeerOrder>()
            .count_documents(doc! { "beer_order_lines.beer_id": beer_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create(&self, order: BeerOrder) -> AppResult<BeerOrder> {
        self.collection::<BeerOrder>()
            .insert_one(&order)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(order)
    }

    pub async fn update(&self, order: &mut BeerOrder) -> AppResult<()> {
        replace_versioned(&self.collection::<BeerOrder>(), order).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = self.collection::<BeerOrder>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        let customer_index = IndexModel::builder()
            .keys(doc! { "customer_id": 1 })
            .options(IndexOptions::builder()
                .name("customer_id".to_string())
                .build())
            .build();

        let line_beer_index = IndexModel::builder()
            .keys(doc! { "beer_order_lines.beer_id": 1 })
            .options(IndexOptions::builder()
                .name("line_beer_id".to_string())
                .build())
            .build();

        self.collection::<BeerOrder>()
            .create_indexes([customer_index, line_beer_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
