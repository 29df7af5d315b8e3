//! 맥주 카탈로그 리포지토리

pub mod beer_repo;
pub mod category_repo;

pub use beer_repo::{beer_filter, BeerRepository};
pub use category_repo::CategoryRepository;
