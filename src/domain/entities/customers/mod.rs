//! 고객 엔티티

pub mod customer;

pub use customer::Customer;
