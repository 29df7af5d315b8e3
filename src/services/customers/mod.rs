//! 고객 관리 서비스 모듈

pub mod customer_service;

pub use customer_service::*;
