//! 맥주 DTO
//!
//! - [`beer_dto`] - 맥주 요청/응답 본문과 매퍼
//! - [`beer_query`] - `GET /api/v1/beer` 쿼리 파라미터

pub mod beer_dto;
pub mod beer_query;

pub use beer_dto::BeerDto;
pub use beer_query::BeerListQuery;
