//! 맥주 카탈로그 서비스 모듈
//!
//! - [`BeerService`] - 맥주 목록/조회/생성/수정/삭제, 카테고리 연결
//! - [`CategoryService`] - 카테고리 목록/조회/생성
//! - [`BeerCsvService`] - CSV 레코드 파싱과 맥주 엔티티 변환

pub mod beer_service;
pub mod category_service;
pub mod beer_csv_service;

pub use beer_service::*;
pub use category_service::*;
pub use beer_csv_service::*;
