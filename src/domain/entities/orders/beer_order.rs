//! Beer Order Entity Implementation
//!
//! 주문(`beer_orders` 컬렉션)과 내장 문서인 주문 라인, 배송 정보를 정의합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::{impl_versioned, new_entity_id, push_unique, timestamps, Customer};

/// 맥주 주문 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub version: i32,
    /// 고객이 붙인 주문 참조 문자열
    #[serde(default)]
    pub customer_ref: Option<String>,
    /// 주문한 고객 ID
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub beer_order_lines: Vec<BeerOrderLine>,
    #[serde(default)]
    pub beer_order_shipment: Option<BeerOrderShipment>,
    pub created_date: DateTime,
    pub update_date: DateTime,
}

impl_versioned!(BeerOrder);

impl BeerOrder {
    pub fn new(customer_ref: Option<String>, beer_order_lines: Vec<BeerOrderLine>) -> Self {
        let (created_date, update_date) = timestamps();

        Self {
            id: new_entity_id(),
            version: 0,
            customer_ref,
            customer_id: None,
            beer_order_lines,
            beer_order_shipment: None,
            created_date,
            update_date,
        }
    }

    /// 주문을 고객에게 연결합니다. 고객의 `beer_order_ids`에도 이 주문이 기록됩니다.
    pub fn assign_customer(&mut self, customer: &mut Customer) {
        self.customer_id = Some(customer.id.clone());
        push_unique(&mut customer.beer_order_ids, &self.id);
    }

    /// 배송 정보를 설정하거나 기존 배송 정보의 운송장 번호를 바꿉니다.
    pub fn ship(&mut self, tracking_number: String) {
        match self.beer_order_shipment.as_mut() {
            Some(shipment) => shipment.update_tracking_number(tracking_number),
            None => self.beer_order_shipment = Some(BeerOrderShipment::new(tracking_number)),
        }
    }

    /// 모든 라인의 주문 수량 합계
    pub fn total_quantity(&self) -> i64 {
        self.beer_order_lines
            .iter()
            .map(|line| i64::from(line.order_quantity))
            .sum()
    }
}

/// 주문 라인 (주문 문서에 내장)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerOrderLine {
    pub id: String,
    pub version: i32,
    pub beer_id: String,
    pub order_quantity: i32,
    pub quantity_allocated: i32,
    pub created_date: DateTime,
    pub update_date: DateTime,
}

impl BeerOrderLine {
    pub fn new(beer_id: String, order_quantity: i32) -> Self {
        let (created_date, update_date) = timestamps();

        Self {
            id: new_entity_id(),
            version: 0,
            beer_id,
            order_quantity,
            quantity_allocated: 0,
            created_date,
            update_date,
        }
    }
}

/// 배송 정보 (주문 문서에 내장)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerOrderShipment {
    pub id: String,
    pub version: i32,
    pub tracking_number: String,
    pub created_date: DateTime,
    pub update_date: DateTime,
}

impl BeerOrderShipment {
    pub fn new(tracking_number: String) -> Self {
        let (created_date, update_date) = timestamps();

        Self {
            id: new_entity_id(),
            version: 0,
            tracking_number,
            created_date,
            update_date,
        }
    }

    fn update_tracking_number(&mut self, tracking_number: String) {
        self.tracking_number = tracking_number;
        self.version += 1;
        self.update_date = DateTime::now();
    }
}
