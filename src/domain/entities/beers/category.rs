//! Category Entity Implementation

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{impl_versioned, new_entity_id, timestamps};

/// 카테고리 엔티티 (`categories` 컬렉션)
///
/// 맥주와 N:M 관계이며, 연결은 [`Beer::add_category`](super::Beer::add_category)로만 만듭니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub version: i32,
    /// 카테고리 설명 (최대 50자)
    pub description: String,
    #[serde(default)]
    pub beer_ids: Vec<String>,
    pub created_date: DateTime,
    pub update_date: DateTime,
}

impl_versioned!(Category);

impl Category {
    pub fn new(description: String) -> Self {
        let (created_date, update_date) = timestamps();

        Self {
            id: new_entity_id(),
            version: 0,
            description,
            beer_ids: Vec::new(),
            created_date,
            update_date,
        }
    }
}
