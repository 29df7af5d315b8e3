//! # Core Framework Module
//!
//! 맥주 서비스 백엔드의 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 싱글톤 인스턴스 생성과 조회
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//! - **의존성 해결**: `Arc<T>` 필드 자동 주입
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **필드 검증**: `validator` 결과를 필드별 메시지 배열로 변환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use singleton_macro::{repository, service};
//!
//! #[repository(name = "beer", collection = "beers")]
//! pub struct BeerRepository {
//!     db: Arc<Database>,
//!     redis: Arc<RedisClient>,
//! }
//!
//! #[service(name = "beer")]
//! pub struct BeerService {
//!     beer_repo: Arc<BeerRepository>, // 자동 주입
//! }
//!
//! let beer_service = BeerService::instance();
//! ```
//!
//! ### 애플리케이션 초기화
//!
//! ```rust,ignore
//! ServiceLocator::set(database);
//! ServiceLocator::set(redis_client);
//! ServiceLocator::initialize_all().await?;
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: No repository found for entity: beerorder
//! ```
//! **해결**: 매크로의 `name` 인자는 타입 이름에서 `Repository`/`Service` 접미사를 떼고
//! 소문자로 바꾼 값과 같아야 합니다 (`BeerOrderRepository` → `name = "beerorder"`).

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
