//! 통합 테스트 공통 초기화
//!
//! 실행 중인 MongoDB와 Redis가 필요합니다. `.env.dev`를 읽으므로
//! 테스트 전용 데이터베이스를 쓰려면 `DATABASE_NAME`을 지정하세요.
//!
//! ```bash
//! DATABASE_NAME=beer_service_test cargo test -- --ignored
//! ```

use std::sync::Arc;
use beer_service_backend::{
    caching::redis::RedisClient,
    core::registry::ServiceLocator,
    db::Database,
};

/// 데이터 저장소를 연결하고 레지스트리를 초기화합니다.
///
/// 각 테스트 파일은 별도 프로세스이므로 파일마다 한 번 호출합니다.
pub async fn init_services() {
    beer_service_backend::config::load_profile_env();
    let _ = env_logger::builder().is_test(true).try_init();

    let database = Database::new().await.expect("MongoDB must be reachable");
    let redis = RedisClient::new().await.expect("Redis must be reachable");

    ServiceLocator::set(Arc::new(database));
    ServiceLocator::set(Arc::new(redis));
    ServiceLocator::initialize_all()
        .await
        .expect("registry initialization failed");
}

/// 다른 테스트 데이터와 겹치지 않는 짧은 식별자
pub fn unique_marker() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
