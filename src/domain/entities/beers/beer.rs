//! Beer Entity Implementation

use mongodb::bson::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{impl_versioned, new_entity_id, push_unique, timestamps};
use super::{BeerStyle, Category};

/// 맥주 엔티티 (`beers` 컬렉션)
///
/// 가격은 정밀도를 잃지 않도록 `Decimal`의 문자열 표기로 저장됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    #[serde(rename = "_id")]
    pub id: String,
    /// 낙관적 잠금 버전
    pub version: i32,
    /// 맥주 이름 (최대 50자)
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    /// 재고 수량 (모를 수 있음)
    #[serde(default)]
    pub quantity_on_hand: Option<i32>,
    pub price: Decimal,
    /// 이 맥주가 속한 카테고리 ID 목록
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub created_date: DateTime,
    pub update_date: DateTime,
}

impl_versioned!(Beer);

impl Beer {
    pub fn new(
        beer_name: String,
        beer_style: BeerStyle,
        upc: String,
        price: Decimal,
        quantity_on_hand: Option<i32>,
    ) -> Self {
        let (created_date, update_date) = timestamps();

        Self {
            id: new_entity_id(),
            version: 0,
            beer_name,
            beer_style,
            upc,
            quantity_on_hand,
            price,
            category_ids: Vec::new(),
            created_date,
            update_date,
        }
    }

    /// 카테고리를 연결합니다. 카테고리 쪽 `beer_ids`도 함께 갱신됩니다.
    ///
    /// 이미 연결된 경우 아무 것도 바꾸지 않고 `false`를 돌려줍니다.
    pub fn add_category(&mut self, category: &mut Category) -> bool {
        let added = push_unique(&mut self.category_ids, &category.id);
        push_unique(&mut category.beer_ids, &self.id);
        added
    }

    /// 카테고리 연결을 양쪽에서 해제합니다.
    pub fn remove_category(&mut self, category: &mut Category) -> bool {
        let before = self.category_ids.len();
        self.category_ids.retain(|id| id != &category.id);
        category.beer_ids.retain(|id| id != &self.id);
        before != self.category_ids.len()
    }
}
