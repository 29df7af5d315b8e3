//! 캐싱 계층 모듈
//!
//! 단건 조회(맥주, 고객, 카테고리, 주문)를 위한 Redis 기반 cache-aside 저장소입니다.
//! 값은 JSON으로 직렬화되어 `{name}_repository:{id}` 키에 TTL과 함께 저장됩니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("beer_repository:0b6b4f3c-...", &beer, 600).await?;
//! let cached: Option<Beer> = cache.get("beer_repository:0b6b4f3c-...").await?;
//! cache.del("beer_repository:0b6b4f3c-...").await?;
//! ```
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
