//! # Domain Layer Module
//!
//! 맥주 카탈로그 도메인의 엔티티, DTO, 모델을 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 맥주, 카테고리, 고객, 주문
//! ├── DTOs      - API 요청/응답 본문, 페이지, 매퍼
//! └── Models    - 인증 사용자, JWT 클레임, CSV 레코드
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! JSON ──serde──► BeerDto ──validate()──► TryFrom ──► Beer ──► MongoDB
//! JSON ◄──serde── BeerDto ◄─────From───────────────── Beer ◄── MongoDB
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::dto::BeerDto;
//! use crate::domain::entities::Beer;
//! use validator::Validate;
//!
//! dto.validate()?;
//! let beer = Beer::try_from(dto)?;
//! let saved = beer_repo.create(beer).await?;
//! Ok(HttpResponse::Created().json(BeerDto::from(saved)))
//! ```

pub mod entities;
pub mod dto;
pub mod models;
