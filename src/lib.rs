//! 맥주 서비스 백엔드
//!
//! 맥주 카탈로그, 고객, 맥주 주문을 관리하는 REST API 서비스입니다.
//! 싱글톤 매크로 기반 의존성 주입과 MongoDB + Redis 저장소를 사용합니다.
//!
//! # Features
//!
//! - **맥주 카탈로그**: 이름/스타일 필터, 페이징, 재고 표시 여부 선택
//! - **고객 / 주문**: 고객별 주문, 주문 라인, 배송 운송장 번호
//! - **카테고리**: 맥주와 N:M 연결
//! - **인증**: HTTP Basic 또는 JWT Bearer
//! - **샘플 데이터**: 시작 시 기본 맥주/고객과 CSV 맥주 적재
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 상태 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, DTO ↔ Entity 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스, 낙관적 잠금
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use beer_service_backend::services::beers::BeerService;
//!
//! let beer_service = BeerService::instance();
//! let page = beer_service.list_beers(&query).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod bootstrap;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
