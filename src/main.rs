//! 맥주 서비스 메인 애플리케이션
//!
//! 기동 순서:
//!
//! ```text
//! .env 로드 → 로깅 → MongoDB/Redis 연결 → 레지스트리 초기화 → 샘플 데이터 → HTTP 서버
//! ```

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use beer_service_backend::bootstrap::BootstrapService;
use beer_service_backend::caching::redis::RedisClient;
use beer_service_backend::config::{self, BootstrapConfig, CorsConfig, RateLimitConfig, ServerConfig};
use beer_service_backend::core::registry::ServiceLocator;
use beer_service_backend::db::Database;
use beer_service_backend::routes::configure_all_routes;

/// HTTP 워커 스레드 수
const WORKERS: usize = 4;

/// 미들웨어와 라우트를 갖춘 App
///
/// actix에서는 마지막 `wrap`이 가장 바깥쪽입니다. 요청은 경로 정규화, 접근 로그, CORS,
/// 요청 제한 순으로 통과하므로 CORS preflight는 요청 제한에 걸리지 않습니다.
macro_rules! beer_app {
    ($governor_conf:expr, $allowed_origins:expr) => {
        App::new()
            .wrap(Governor::new($governor_conf))
            .wrap(configure_cors($allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    };
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // RUST_LOG도 .env 파일에서 올 수 있으므로 로깅보다 먼저 로드
    let loaded = config::load_profile_env();
    init_logging();

    match loaded.env_file {
        Some(file) => info!("{} 파일 로드 됨", file),
        None => warn!("PROFILE={} 환경 파일을 찾지 못해 기존 환경 변수를 사용합니다", loaded.profile),
    }

    info!("🚀 맥주 서비스 시작중... (PROFILE={})", loaded.profile);

    register_data_stores().await?;

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| io_error(format!("서비스 초기화 실패: {}", e)))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    load_sample_data().await?;

    start_http_server().await
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 기본값: info,actix_web=debug
/// RUST_LOG=debug cargo run
/// RUST_LOG=beer_service_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis에 연결하고 레지스트리에 등록합니다.
///
/// 리포지토리는 생성 시점에 두 핸들을 찾으므로 `initialize_all()`보다 먼저 호출해야 합니다.
async fn register_data_stores() -> io::Result<()> {
    info!("📡 데이터 저장소 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| io_error(format!("데이터베이스 연결 실패: {}", e)))?;
    ServiceLocator::set(Arc::new(database));

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| io_error(format!("Redis 연결 실패: {}", e)))?;
    ServiceLocator::set(Arc::new(redis_client));

    Ok(())
}

/// `BOOTSTRAP_ENABLED`가 꺼져 있지 않으면 샘플 맥주와 고객을 적재합니다.
async fn load_sample_data() -> io::Result<()> {
    if !BootstrapConfig::enabled() {
        info!("⏭️ 샘플 데이터 적재 비활성화 (BOOTSTRAP_ENABLED=false)");
        return Ok(());
    }

    BootstrapService::instance()
        .run()
        .await
        .map_err(|e| io_error(format!("샘플 데이터 적재 실패: {}", e)))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 미들웨어 순서는 `beer_app!`을 참고하세요.
///
/// # Errors
///
/// * `io::Error` - 요청 제한 설정 오류, 포트 바인딩 실패
async fn start_http_server() -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io_error(format!(
            "Rate Limiting 설정이 올바르지 않습니다 (초당 {}, 버스트 {})",
            per_second, burst_size
        )))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Beer API: http://{}/api/v1/beer", bind_address);

    HttpServer::new(move || beer_app!(&governor_conf, &allowed_origins))
        .bind(&bind_address)?
        .workers(WORKERS)
        .run()
        .await
}

/// CORS 설정을 구성합니다
///
/// 생성 응답의 `Location` 헤더를 브라우저 클라이언트가 읽을 수 있도록 노출합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])
        .supports_credentials()
        .max_age(3600)
}

fn io_error(message: String) -> io::Error {
    error!("❌ {}", message);
    io::Error::other(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    fn origins() -> Vec<String> {
        vec!["http://localhost:3000".to_string()]
    }

    #[actix_web::test]
    async fn test_preflight_is_answered_before_rate_limit() {
        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(1)
            .burst_size(1)
            .finish()
            .unwrap();
        let app = test::init_service(beer_app!(&governor_conf, &origins())).await;

        // 요청 제한보다 많은 preflight도 모두 CORS가 응답
        for _ in 0..3 {
            let req = test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri("/api/v1/beer")
                .insert_header((header::ORIGIN, "http://localhost:3000"))
                .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
                "http://localhost:3000"
            );
        }
    }

    #[actix_web::test]
    async fn test_trailing_slash_is_trimmed_before_routing() {
        let governor_conf = GovernorConfigBuilder::default()
            .requests_per_second(10)
            .burst_size(10)
            .finish()
            .unwrap();
        let app = test::init_service(beer_app!(&governor_conf, &origins())).await;

        let req = test::TestRequest::get()
            .uri("/health/")
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
