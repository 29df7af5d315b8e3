//! # 맥주 주문 DTO
//!
//! 주문 생성 요청 예시:
//!
//! ```json
//! {
//!   "customerRef": "Test Order",
//!   "customerId": "6d1f3c5e-8a1b-4a8f-9a43-1f1f0c1e2b3c",
//!   "beerOrderLines": [
//!     { "beerId": "0b6b4f3c-6c2e-4a53-9d0b-0d6b6f3f7a11", "orderQuantity": 6 }
//!   ],
//!   "beerOrderShipment": { "trackingNumber": "35235t" }
//! }
//! ```
//!
//! 고객과 맥주의 존재 여부는 서비스 계층에서 확인합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::domain::dto::{to_utc, to_uuid, validate_not_blank};
use crate::domain::entities::{BeerOrder, BeerOrderLine, BeerOrderShipment};
use crate::utils::string_utils::clean_optional_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub version: Option<i32>,

    #[serde(default)]
    #[validate(length(max = 255, message = "size must be between 0 and 255"))]
    pub customer_ref: Option<String>,

    #[serde(default)]
    #[validate(required(message = "must not be null"))]
    pub customer_id: Option<Uuid>,

    #[serde(default)]
    #[validate(nested)]
    pub beer_order_lines: Vec<BeerOrderLineDto>,

    #[serde(default)]
    #[validate(nested)]
    pub beer_order_shipment: Option<BeerOrderShipmentDto>,

    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    #[validate(required(message = "must not be null"))]
    pub beer_id: Option<Uuid>,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        range(min = 1, message = "must be greater than or equal to 1")
    )]
    pub order_quantity: Option<i32>,

    /// 할당 수량 (응답 전용)
    #[serde(default)]
    pub quantity_allocated: Option<i32>,
}

/// 배송 정보
///
/// `PATCH /api/v1/beerorders/{id}/shipment` 요청 본문으로도 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderShipmentDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        length(max = 255, message = "size must be between 0 and 255"),
        custom(function = "validate_not_blank")
    )]
    pub tracking_number: Option<String>,
}

impl BeerOrderDto {
    /// 검증을 통과한 요청으로 새 주문을 만듭니다.
    ///
    /// 고객 연결은 호출자가 [`BeerOrder::assign_customer`]로 수행합니다.
    pub fn to_new_order(&self) -> BeerOrder {
        let lines = self
            .beer_order_lines
            .iter()
            .filter_map(|line| match (line.beer_id, line.order_quantity) {
                (Some(beer_id), Some(quantity)) => Some(BeerOrderLine::new(beer_id.to_string(), quantity)),
                _ => None,
            })
            .collect();

        let mut order = BeerOrder::new(clean_optional_string(self.customer_ref.clone()), lines);

        if let Some(tracking_number) = self
            .beer_order_shipment
            .as_ref()
            .and_then(|shipment| clean_optional_string(shipment.tracking_number.clone()))
        {
            order.ship(tracking_number);
        }

        order
    }

    /// 주문에 등장하는 맥주 ID (중복 제거, 등장 순서 유지)
    pub fn beer_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::new();
        for id in self.beer_order_lines.iter().filter_map(|line| line.beer_id) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

impl From<BeerOrder> for BeerOrderDto {
    fn from(order: BeerOrder) -> Self {
        Self {
            id: to_uuid(&order.id),
            version: Some(order.version),
            customer_ref: order.customer_ref,
            customer_id: order.customer_id.as_deref().and_then(to_uuid),
            beer_order_lines: order.beer_order_lines.into_iter().map(BeerOrderLineDto::from).collect(),
            beer_order_shipment: order.beer_order_shipment.map(BeerOrderShipmentDto::from),
            created_date: Some(to_utc(order.created_date)),
            update_date: Some(to_utc(order.update_date)),
        }
    }
}

impl From<BeerOrderLine> for BeerOrderLineDto {
    fn from(line: BeerOrderLine) -> Self {
        Self {
            id: to_uuid(&line.id),
            beer_id: to_uuid(&line.beer_id),
            order_quantity: Some(line.order_quantity),
            quantity_allocated: Some(line.quantity_allocated),
        }
    }
}

impl From<BeerOrderShipment> for BeerOrderShipmentDto {
    fn from(shipment: BeerOrderShipment) -> Self {
        Self {
            id: to_uuid(&shipment.id),
            tracking_number: Some(shipment.tracking_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;

    fn line(beer_id: Uuid, quantity: i32) -> BeerOrderLineDto {
        BeerOrderLineDto {
            beer_id: Some(beer_id),
            order_quantity: Some(quantity),
            ..Default::default()
        }
    }

    #[test]
    fn test_customer_id_is_required() {
        let dto = BeerOrderDto::default();
        match AppError::from(dto.validate().unwrap_err()) {
            AppError::FieldValidation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "customerId");
            }
            other => panic!("Expected FieldValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_quantity_line_is_rejected() {
        let dto = BeerOrderDto {
            customer_id: Some(Uuid::new_v4()),
            beer_order_lines: vec![line(Uuid::new_v4(), 0)],
            ..Default::default()
        };

        match AppError::from(dto.validate().unwrap_err()) {
            AppError::FieldValidation(violations) => {
                assert_eq!(violations[0].field, "beerOrderLines[0].orderQuantity");
            }
            other => panic!("Expected FieldValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_to_new_order_builds_lines_and_shipment() {
        let beer_id = Uuid::new_v4();
        let dto = BeerOrderDto {
            customer_ref: Some(" Test Order ".to_string()),
            customer_id: Some(Uuid::new_v4()),
            beer_order_lines: vec![line(beer_id, 6)],
            beer_order_shipment: Some(BeerOrderShipmentDto {
                id: None,
                tracking_number: Some("35235t".to_string()),
            }),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let order = dto.to_new_order();

        assert_eq!(order.customer_ref.as_deref(), Some("Test Order"));
        assert_eq!(order.customer_id, None);
        assert_eq!(order.beer_order_lines.len(), 1);
        assert_eq!(order.beer_order_lines[0].beer_id, beer_id.to_string());
        assert_eq!(order.beer_order_lines[0].order_quantity, 6);
        assert_eq!(
            order.beer_order_shipment.as_ref().map(|s| s.tracking_number.as_str()),
            Some("35235t")
        );
    }

    #[test]
    fn test_beer_ids_are_deduplicated() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let dto = BeerOrderDto {
            beer_order_lines: vec![line(a, 1), line(b, 2), line(a, 3)],
            ..Default::default()
        };

        assert_eq!(dto.beer_ids(), vec![a, b]);
    }

    #[test]
    fn test_entity_to_dto() {
        let mut order = BeerOrder::new(Some("Ref".to_string()), vec![BeerOrderLine::new(Uuid::new_v4().to_string(), 2)]);
        order.ship("abc".to_string());

        let json = serde_json::to_value(BeerOrderDto::from(order)).unwrap();

        assert_eq!(json["customerRef"], "Ref");
        assert_eq!(json["beerOrderLines"][0]["orderQuantity"], 2);
        assert_eq!(json["beerOrderLines"][0]["quantityAllocated"], 0);
        assert_eq!(json["beerOrderShipment"]["trackingNumber"], "abc");
    }
}
