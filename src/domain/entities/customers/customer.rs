//! Customer Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{impl_versioned, new_entity_id, timestamps};

/// 고객 엔티티 (`customers` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub version: i32,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// 이 고객의 주문 ID 목록
    #[serde(default)]
    pub beer_order_ids: Vec<String>,
    pub created_date: DateTime,
    pub update_date: DateTime,
}

impl_versioned!(Customer);

impl Customer {
    pub fn new(name: String, email: Option<String>) -> Self {
        let (created_date, update_date) = timestamps();

        Self {
            id: new_entity_id(),
            version: 0,
            name,
            email,
            beer_order_ids: Vec::new(),
            created_date,
            update_date,
        }
    }

    /// 주문 연결을 해제합니다. 연결되어 있지 않았다면 `false`
    pub fn remove_order(&mut self, order_id: &str) -> bool {
        let before = self.beer_order_ids.len();
        self.beer_order_ids.retain(|id| id != order_id);
        before != self.beer_order_ids.len()
    }
}
