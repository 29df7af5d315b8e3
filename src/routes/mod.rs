//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # 라우트 구성
//!
//! | 스코프 | 인증 |
//! |--------|------|
//! | `/health` | 불필요 |
//! | `/api/v1/beer` | `user` 또는 `admin` 역할 |
//! | `/api/v1/customers` | `user` 또는 `admin` 역할 |
//! | `/api/v1/categories` | `user` 또는 `admin` 역할 |
//! | `/api/v1/beerorders` | `user` 또는 `admin` 역할 |
//! | `/api/v1/auth` | Basic 인증 |
//!
//! # 요청 본문/쿼리 파싱 실패
//!
//! JSON 본문이나 쿼리 문자열을 해석할 수 없으면 (알 수 없는 `beerStyle`,
//! 숫자가 아닌 `pageSize` 등) `AppError::ValidationError`로 변환되어 400으로 응답합니다.

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// API 사용에 필요한 역할
const API_ROLES: [&str; 2] = ["user", "admin"];

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_check);

    configure_beer_routes(cfg);
    configure_customer_routes(cfg);
    configure_category_routes(cfg);
    configure_order_routes(cfg);
    configure_auth_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::debug!("JSON 본문 파싱 실패: {} ({})", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        log::debug!("쿼리 파싱 실패: {} ({})", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}

fn configure_beer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(handlers::beers::BEER_PATH)
            .wrap(AuthMiddleware::required_with_roles(&API_ROLES))
            .service(handlers::beers::list_beers)
            .service(handlers::beers::get_beer)
            .service(handlers::beers::create_beer)
            .service(handlers::beers::update_beer)
            .service(handlers::beers::patch_beer)
            .service(handlers::beers::delete_beer)
            .service(handlers::beers::add_beer_category)
            .service(handlers::beers::remove_beer_category)
    );
}

fn configure_customer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(handlers::customers::CUSTOMER_PATH)
            .wrap(AuthMiddleware::required_with_roles(&API_ROLES))
            .service(handlers::customers::list_customers)
            .service(handlers::customers::get_customer)
            .service(handlers::customers::create_customer)
            .service(handlers::customers::update_customer)
            .service(handlers::customers::patch_customer)
            .service(handlers::customers::delete_customer)
    );
}

fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(handlers::categories::CATEGORY_PATH)
            .wrap(AuthMiddleware::required_with_roles(&API_ROLES))
            .service(handlers::categories::list_categories)
            .service(handlers::categories::get_category)
            .service(handlers::categories::create_category)
    );
}

fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(handlers::orders::BEER_ORDER_PATH)
            .wrap(AuthMiddleware::required_with_roles(&API_ROLES))
            .service(handlers::orders::list_orders)
            .service(handlers::orders::get_order)
            .service(handlers::orders::create_order)
            .service(handlers::orders::ship_order)
            .service(handlers::orders::delete_order)
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(AuthMiddleware::required())
            .service(handlers::auth::issue_token)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "beer_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use crate::domain::models::{AuthMethod, AuthenticatedUser};
    use crate::services::auth::TokenService;

    fn bearer() -> String {
        let user = AuthenticatedUser {
            username: "user1".to_string(),
            auth_method: AuthMethod::Basic,
            roles: vec!["user".to_string()],
        };
        let token = TokenService::instance().issue_token(&user).unwrap();
        format!("Bearer {}", token.access_token)
    }

    #[actix_web::test]
    async fn test_health_check_is_public() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_api_requires_authentication() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        for uri in ["/api/v1/beer", "/api/v1/customers", "/api/v1/categories", "/api/v1/beerorders"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_unknown_beer_style_returns_400() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/beer?beerStyle=LEMONADE")
            .insert_header(("Authorization", bearer()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_json_returns_400() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/beer")
            .insert_header(("Authorization", bearer()))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ \"beerName\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().is_some());
    }
}
