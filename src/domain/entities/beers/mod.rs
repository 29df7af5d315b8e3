//! 맥주 카탈로그 엔티티
//!
//! - [`beer`] - 맥주 ([`Beer`])
//! - [`beer_style`] - 맥주 스타일 열거형 ([`BeerStyle`])
//! - [`category`] - 카테고리 ([`Category`])

pub mod beer;
pub mod beer_style;
pub mod category;

pub use beer::Beer;
pub use beer_style::BeerStyle;
pub use category::Category;
