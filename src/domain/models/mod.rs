//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체입니다.
//!
//! ## Entities vs Models
//!
//! - **Entities** (`../entities/`): MongoDB 문서로 저장되고 고유 ID와 버전을 가집니다.
//! - **Models** (이 모듈): 요청 처리 중에만 존재하는 값입니다.
//!
//! ## 모듈 구성
//!
//! - [`auth`] - 인증된 사용자, 인증 모드, 요구 역할
//! - [`token`] - JWT 클레임
//! - [`csv_import`] - 맥주 CSV 레코드

pub mod auth;
pub mod token;
pub mod csv_import;

pub use auth::*;
pub use token::*;
pub use csv_import::*;
