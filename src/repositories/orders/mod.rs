//! 맥주 주문 리포지토리

pub mod beer_order_repo;

pub use beer_order_repo::BeerOrderRepository;
