//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//!
//! # Modules
//!
//! - [`beers`] - 맥주 카탈로그, 카테고리, CSV 적재
//! - [`customers`] - 고객 관리
//! - [`orders`] - 맥주 주문과 배송 정보
//! - [`auth`] - HTTP Basic 검증과 JWT 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::beers::BeerService;
//!
//! let beer_service = BeerService::instance();
//! let beer = beer_service.get_beer(beer_id).await?;
//! ```

pub mod beers;
pub mod customers;
pub mod orders;
pub mod auth;
