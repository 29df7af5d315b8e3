//! 고객 리포지토리

pub mod customer_repo;

pub use customer_repo::CustomerRepository;
