//! 고객 DTO

pub mod customer_dto;

pub use customer_dto::CustomerDto;
