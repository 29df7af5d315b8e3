//! 맥주 주문 서비스 모듈

pub mod beer_order_service;

pub use beer_order_service::*;
