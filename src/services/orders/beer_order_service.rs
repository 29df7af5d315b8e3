//! # 맥주 주문 서비스 구현
//!
//! ## 주문 생성 과정
//!
//! ```text
//! BeerOrderDto (검증 완료)
//!     │
//!     ├─ 1. 고객 존재 확인 ─────────── 없으면 404
//!     ├─ 2. 모든 라인의 맥주 존재 확인 ─ 하나라도 없으면 404
//!     ├─ 3. 주문 생성 + 고객 연결
//!     └─ 4. 주문 저장 → 고객의 주문 목록에 ID 추가 ($addToSet)
//!            └─ 실패하면 저장한 주문을 다시 삭제
//! ```

use std::sync::Arc;
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::{BeerOrderDto, BeerOrderListQuery, BeerOrderShipmentDto},
        entities::BeerOrder,
    },
    repositories::{
        beers::BeerRepository,
        customers::CustomerRepository,
        orders::BeerOrderRepository,
    },
};

#[service(name = "beerorder")]
pub struct BeerOrderService {
    beer_order_repo: Arc<BeerOrderRepository>,
    customer_repo: Arc<CustomerRepository>,
    beer_repo: Arc<BeerRepository>,
}

impl BeerOrderService {
    /// 주문 목록. `customerId`가 주어지면 그 고객의 주문만
    pub async fn list_orders(&self, query: &BeerOrderListQuery) -> AppResult<Vec<BeerOrderDto>> {
        let customer_id = query.customer_id.map(|id| id.to_string());
        let orders = self.beer_order_repo.find_all(customer_id.as_deref()).await?;

        Ok(orders.into_iter().map(BeerOrderDto::from).collect())
    }

    pub async fn get_order(&self, id: Uuid) -> AppResult<BeerOrderDto> {
        self.find_order(id).await.map(BeerOrderDto::from)
    }

    /// 새 주문을 저장하고 고객에게 연결합니다.
    pub async fn create_order(&self, dto: BeerOrderDto) -> AppResult<BeerOrderDto> {
        let customer_id = dto
            .customer_id
            .ok_or_else(|| AppError::ValidationError("customerId must not be null".to_string()))?
            .to_string();

        let mut customer = self.customer_repo
            .find_for_update(&customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {} not found", customer_id)))?;

        let beer_ids: Vec<String> = dto.beer_ids().iter().map(Uuid::to_string).collect();
        let found = self.beer_repo.find_by_ids(&beer_ids).await?;
        if let Some(missing) = beer_ids.iter().find(|id| !found.iter().any(|beer| &beer.id == *id)) {
            return Err(AppError::NotFound(format!("Beer {} not found", missing)));
        }

        let mut order = dto.to_new_order();
        order.assign_customer(&mut customer);

        let created = self.beer_order_repo.create(order).await?;
        if let Err(e) = self.customer_repo.add_order_id(&customer.id, &created.id).await {
            log::warn!("⚠️ 고객 연결 실패로 주문 {} 취소: {}", created.id, e);
            self.beer_order_repo.delete(&created.id).await?;
            return Err(e);
        }

        log::info!(
            "🧾 주문 생성: {} (고객 {}, 라인 {}개, 수량 {})",
            created.id,
            customer.id,
            created.beer_order_lines.len(),
            created.total_quantity()
        );

        Ok(BeerOrderDto::from(created))
    }

    /// 운송장 번호를 설정합니다. 배송 정보가 없으면 새로 만듭니다.
    pub async fn ship_order(&self, id: Uuid, shipment: BeerOrderShipmentDto) -> AppResult<BeerOrderDto> {
        let tracking_number = shipment
            .tracking_number
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::ValidationError("trackingNumber must not be blank".to_string()))?;

        let mut order = self.find_order(id).await?;
        order.ship(tracking_number);
        self.beer_order_repo.update(&mut order).await?;

        log::info!("🚚 주문 배송 정보 갱신: {}", order.id);

        Ok(BeerOrderDto::from(order))
    }

    /// 주문을 삭제하고 고객의 주문 목록에서도 제거합니다.
    pub async fn delete_order(&self, id: Uuid) -> AppResult<()> {
        let order = self.find_order(id).await?;

        if !self.beer_order_repo.delete(&order.id).await? {
            return Err(order_not_found(&order.id));
        }

        if let Some(customer_id) = order.customer_id.as_deref() {
            if let Some(mut customer) = self.customer_repo.find_for_update(customer_id).await? {
                if customer.remove_order(&order.id) {
                    self.customer_repo.remove_order_id(customer_id, &order.id).await?;
                }
            }
        }

        log::info!("🗑️ 주문 삭제: {}", order.id);

        Ok(())
    }

    async fn find_order(&self, id: Uuid) -> AppResult<BeerOrder> {
        let id = id.to_string();
        self.beer_order_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| order_not_found(&id))
    }
}

fn order_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Beer order {} not found", id))
}
