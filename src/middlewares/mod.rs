//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용하는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Basic ...` 또는 `Authorization: Bearer <jwt>` 검증
//! - 사용자 정보를 request extension에 저장
//! - 역할 요구 지원 (나열된 역할 중 하나)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/beer")
//!             .wrap(AuthMiddleware::required())
//!             .route("", web::get().to(list_beers))
//!     )
//!     .route("/health", web::get().to(health_check))
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
