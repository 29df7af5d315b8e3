//! 맥주 주문 엔티티
//!
//! 주문 라인과 배송 정보는 주문 문서 안에 내장됩니다.

pub mod beer_order;

pub use beer_order::{BeerOrder, BeerOrderLine, BeerOrderShipment};
