//! 맥주 주문 DTO
//!
//! - [`beer_order_dto`] - 주문, 주문 라인, 배송 정보와 매퍼
//! - [`beer_order_query`] - 주문 목록 조회 쿼리

pub mod beer_order_dto;
pub mod beer_order_query;

pub use beer_order_dto::{BeerOrderDto, BeerOrderLineDto, BeerOrderShipmentDto};
pub use beer_order_query::BeerOrderListQuery;
