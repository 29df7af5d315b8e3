//! # 맥주 서비스 구현
//!
//! 맥주 카탈로그의 비즈니스 로직을 담당합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Handler ──▶ BeerService ──▶ BeerRepository ──▶ MongoDB (+ Redis)
//!                  │
//!                  ├──────▶ CategoryRepository (카테고리 연결/해제, 삭제 정리)
//!                  └──────▶ BeerOrderRepository (주문에서 참조 중인지 확인)
//! ```
//!
//! ## 목록 조회 규칙
//!
//! 1. 이름(부분 일치, 대소문자 무시)과 스타일(정확히 일치) 필터를 조합합니다.
//! 2. 이름 오름차순으로 정렬하고 페이지 크기를 25(기본) ~ 1000(최대)으로 제한합니다.
//! 3. `showInventory=false`이면 모든 항목의 재고 수량을 `null`로 응답합니다.

use std::sync::Arc;
use singleton_macro::service;
use uuid::Uuid;
use validator::Validate;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::{BeerDto, BeerListQuery, Page},
        entities::{Beer, Category},
    },
    repositories::{
        beers::{beer_filter, BeerRepository, CategoryRepository},
        orders::BeerOrderRepository,
    },
};

/// 맥주 비즈니스 로직 서비스
///
/// ```rust,ignore
/// let beer_service = BeerService::instance();
/// let page = beer_service.list_beers(&query).await?;
/// ```
#[service(name = "beer")]
pub struct BeerService {
    beer_repo: Arc<BeerRepository>,
    category_repo: Arc<CategoryRepository>,
    beer_order_repo: Arc<BeerOrderRepository>,
}

impl BeerService {
    /// 필터와 페이지 조건으로 맥주 목록을 조회합니다.
    pub async fn list_beers(&self, query: &BeerListQuery) -> AppResult<Page<BeerDto>> {
        let filter = beer_filter(query.name_filter(), query.beer_style);
        let page_request = query.page_request();

        let (beers, total) = self.beer_repo.find_page(filter, page_request).await?;

        log::debug!(
            "맥주 목록 조회: page={}, size={}, total={}",
            page_request.page,
            page_request.size,
            total
        );

        let hide_inventory = query.hides_inventory();
        let page = Page::new(beers, page_request, total).map(|beer| {
            let dto = BeerDto::from(beer);
            if hide_inventory {
                dto.without_inventory()
            } else {
                dto
            }
        });

        Ok(page)
    }

    pub async fn get_beer(&self, id: Uuid) -> AppResult<BeerDto> {
        self.find_beer(id).await.map(BeerDto::from)
    }

    /// 새 맥주를 저장합니다. 요청의 `id`, `version`은 무시됩니다.
    pub async fn create_beer(&self, dto: BeerDto) -> AppResult<BeerDto> {
        let beer = Beer::try_from(dto)?;
        let created = self.beer_repo.create(beer).await?;

        log::info!("🍺 맥주 생성: {} ({})", created.beer_name, created.id);

        Ok(BeerDto::from(created))
    }

    /// 이름, 스타일, UPC, 가격, 재고를 모두 교체합니다.
    pub async fn update_beer(&self, id: Uuid, dto: BeerDto) -> AppResult<BeerDto> {
        let mut beer = self.find_beer_for_update(id).await?;

        dto.apply_update(&mut beer)?;
        self.beer_repo.update(&mut beer).await?;

        log::info!("✏️ 맥주 수정: {} (version {})", beer.id, beer.version);

        Ok(BeerDto::from(beer))
    }

    /// 값이 있고 공백이 아닌 필드만 반영합니다.
    ///
    /// 병합 결과도 생성 때와 같은 제약을 만족해야 합니다.
    /// 바뀐 필드가 없으면 저장하지 않고 현재 상태를 돌려줍니다.
    pub async fn patch_beer(&self, id: Uuid, dto: BeerDto) -> AppResult<BeerDto> {
        let mut beer = self.find_beer_for_update(id).await?;

        if !dto.apply_patch(&mut beer) {
            return Ok(BeerDto::from(beer));
        }

        BeerDto::from(beer.clone()).validate()?;
        self.beer_repo.update(&mut beer).await?;

        log::info!("✏️ 맥주 부분 수정: {} (version {})", beer.id, beer.version);

        Ok(BeerDto::from(beer))
    }

    /// 맥주를 삭제하고 카테고리에 남은 연결을 정리합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 맥주
    /// * `AppError::ConflictError` - 주문 라인이 이 맥주를 참조함
    pub async fn delete_beer(&self, id: Uuid) -> AppResult<()> {
        let id = id.to_string();

        let orders = self.beer_order_repo.count_by_beer(&id).await?;
        if orders > 0 {
            log::warn!("⚠️ 주문 {}건이 참조하는 맥주 삭제 시도: {}", orders, id);
            return Err(AppError::ConflictError(format!(
                "Beer {} is referenced by {} beer order(s)",
                id, orders
            )));
        }

        if !self.beer_repo.delete(&id).await? {
            return Err(beer_not_found(&id));
        }

        let unlinked = self.category_repo.remove_beer_everywhere(&id).await?;
        log::info!("🗑️ 맥주 삭제: {} (카테고리 연결 {}건 해제)", id, unlinked);

        Ok(())
    }

    /// 맥주에 카테고리를 연결합니다. 이미 연결된 쪽은 저장하지 않습니다.
    ///
    /// 양쪽 ID 목록은 각각 단일 문서 연산으로 갱신되어 동시 수정과 충돌하지 않습니다.
    pub async fn add_category(&self, beer_id: Uuid, category_id: Uuid) -> AppResult<BeerDto> {
        let mut beer = self.find_beer_for_update(beer_id).await?;
        let mut category = self.find_category(category_id).await?;

        let category_had_beer = category.beer_ids.contains(&beer.id);

        if beer.add_category(&mut category) {
            self.beer_repo.add_category_id(&beer.id, &category.id).await?;
        }
        if !category_had_beer {
            self.category_repo.add_beer_id(&category.id, &beer.id).await?;
        }

        self.find_beer_for_update(beer_id).await.map(BeerDto::from)
    }

    /// 카테고리 연결을 해제합니다. 연결되어 있지 않았던 쪽은 저장하지 않습니다.
    pub async fn remove_category(&self, beer_id: Uuid, category_id: Uuid) -> AppResult<BeerDto> {
        let mut beer = self.find_beer_for_update(beer_id).await?;
        let mut category = self.find_category(category_id).await?;

        let category_had_beer = category.beer_ids.contains(&beer.id);

        if beer.remove_category(&mut category) {
            self.beer_repo.remove_category_id(&beer.id, &category.id).await?;
        }
        if category_had_beer {
            self.category_repo.remove_beer_id(&category.id, &beer.id).await?;
        }

        self.find_beer_for_update(beer_id).await.map(BeerDto::from)
    }

    async fn find_beer(&self, id: Uuid) -> AppResult<Beer> {
        let id = id.to_string();
        self.beer_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| beer_not_found(&id))
    }

    async fn find_beer_for_update(&self, id: Uuid) -> AppResult<Beer> {
        let id = id.to_string();
        self.beer_repo
            .find_for_update(&id)
            .await?
            .ok_or_else(|| beer_not_found(&id))
    }

    async fn find_category(&self, id: Uuid) -> AppResult<Category> {
        let id = id.to_string();
        self.category_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}

fn beer_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Beer {} not found", id))
}
