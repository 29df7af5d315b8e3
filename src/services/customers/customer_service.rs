//! # 고객 서비스 구현
//!
//! 고객 목록/조회/생성/수정/삭제를 담당합니다.
//! 주문이 남아 있는 고객은 삭제할 수 없습니다.

use std::sync::Arc;
use singleton_macro::service;
use uuid::Uuid;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{dto::CustomerDto, entities::Customer},
    repositories::{customers::CustomerRepository, orders::BeerOrderRepository},
};

#[service(name = "customer")]
pub struct CustomerService {
    customer_repo: Arc<CustomerRepository>,
    beer_order_repo: Arc<BeerOrderRepository>,
}

impl CustomerService {
    /// 이름 오름차순 전체 목록
    pub async fn list_customers(&self) -> AppResult<Vec<CustomerDto>> {
        let customers = self.customer_repo.find_all().await?;
        Ok(customers.into_iter().map(CustomerDto::from).collect())
    }

    pub async fn get_customer(&self, id: Uuid) -> AppResult<CustomerDto> {
        self.find_customer(id).await.map(CustomerDto::from)
    }

    pub async fn create_customer(&self, dto: CustomerDto) -> AppResult<CustomerDto> {
        let customer = Customer::try_from(dto)?;
        let created = self.customer_repo.create(customer).await?;

        log::info!("👤 고객 생성: {} ({})", created.name, created.id);

        Ok(CustomerDto::from(created))
    }

    /// 이름과 이메일을 교체합니다.
    pub async fn update_customer(&self, id: Uuid, dto: CustomerDto) -> AppResult<CustomerDto> {
        let mut customer = self.find_customer_for_update(id).await?;

        dto.apply_update(&mut customer)?;
        self.customer_repo.update(&mut customer).await?;

        log::info!("✏️ 고객 수정: {} (version {})", customer.id, customer.version);

        Ok(CustomerDto::from(customer))
    }

    /// 이름은 공백이 아닐 때, 이메일은 값이 있을 때만 반영합니다.
    pub async fn patch_customer(&self, id: Uuid, dto: CustomerDto) -> AppResult<CustomerDto> {
        let mut customer = self.find_customer_for_update(id).await?;

        if !dto.apply_patch(&mut customer) {
            return Ok(CustomerDto::from(customer));
        }

        CustomerDto::from(customer.clone()).validate()?;
        self.customer_repo.update(&mut customer).await?;

        log::info!("✏️ 고객 부분 수정: {} (version {})", customer.id, customer.version);

        Ok(CustomerDto::from(customer))
    }

    /// 고객을 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 고객
    /// * `AppError::ConflictError` - 고객의 주문이 남아 있음
    pub async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        let id = id.to_string();

        let orders = self.beer_order_repo.count_by_customer(&id).await?;
        if orders > 0 {
            log::warn!("⚠️ 주문 {}건이 남은 고객 삭제 시도: {}", orders, id);
            return Err(AppError::ConflictError(format!(
                "Customer {} still has {} beer order(s)",
                id, orders
            )));
        }

        if !self.customer_repo.delete(&id).await? {
            return Err(customer_not_found(&id));
        }

        log::info!("🗑️ 고객 삭제: {}", id);

        Ok(())
    }

    async fn find_customer(&self, id: Uuid) -> AppResult<Customer> {
        let id = id.to_string();
        self.customer_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| customer_not_found(&id))
    }

    async fn find_customer_for_update(&self, id: Uuid) -> AppResult<Customer> {
        let id = id.to_string();
        self.customer_repo
            .find_for_update(&id)
            .await?
            .ok_or_else(|| customer_not_found(&id))
    }
}

fn customer_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Customer {} not found", id))
}
