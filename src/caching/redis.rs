//! # Redis 캐시 클라이언트
//!
//! 멀티플렉싱 연결 위에서 JSON 직렬화된 값을 읽고 씁니다.
//! 캐시는 보조 저장소이므로 호출자는 여기서 나온 오류를 무시하고
//! MongoDB 결과를 그대로 사용해도 됩니다.

use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

/// Redis 캐시 클라이언트 래퍼
///
/// 리포지토리 매크로가 `redis` 필드로 주입하는 타입입니다.
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("customer_repository:42", &customer, 600).await?;
/// let cached: Option<Customer> = redis.get("customer_repository:42").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)에 연결하고 PING으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 키에 저장된 JSON을 `T`로 역직렬화해 돌려줍니다. 키가 없으면 `None`입니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// TTL(초)과 함께 저장합니다. 단건 조회 캐시는 모두 이 경로를 사용합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: usize) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set_ex(key, to_json(value)?, seconds as u64).await
    }

    /// 키를 삭제합니다. 없는 키도 성공으로 처리됩니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    /// 패턴과 일치하는 키 목록 (`beer_repository:*` 등)
    ///
    /// KEYS는 블로킹 명령이므로 컬렉션 단위 무효화처럼 드문 경로에서만 사용합니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, redis::RedisError> {
    serde_json::to_string(value)
        .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))
}
