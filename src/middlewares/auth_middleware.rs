//! 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Basic 자격 증명 또는 JWT 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 인증 미들웨어
///
/// 자격 증명이 없거나 잘못되면 401, 필요한 역할이 없으면 403으로 응답합니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 인증만 요구하는 미들웨어
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 나열된 역할 중 하나를 요구하는 미들웨어
    pub fn required_with_roles(roles: &[&str]) -> Self {
        Self {
            required_role: Some(RequiredRole::any_of(roles)),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use base64::{engine::general_purpose::STANDARD, Engine};
    use crate::domain::models::{AuthMethod, AuthenticatedUser};
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    fn bearer_for(username: &str, roles: &[&str]) -> String {
        let user = AuthenticatedUser {
            username: username.to_string(),
            auth_method: AuthMethod::Basic,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        };
        let token = TokenService::instance().issue_token(&user).unwrap();
        format!("Bearer {}", token.access_token)
    }

    #[actix_web::test]
    async fn test_missing_credentials_returns_401() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::required())
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_malformed_basic_header_returns_401() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::required())
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", format!("Basic {}", STANDARD.encode("no-colon"))))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_bearer_token_passes_through() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::required())
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", bearer_for("user1", &["user"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "user1");
    }

    #[actix_web::test]
    async fn test_any_listed_role_passes() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(AuthMiddleware::required_with_roles(&["user", "admin"]))
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", bearer_for("user1", &["admin"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_missing_role_returns_403() {
        let app = test::init_service(
            App::new().service(
                web::scope("/admin")
                    .wrap(AuthMiddleware::required_with_roles(&["admin"]))
                    .route("/me", web::get().to(whoami)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/admin/me")
            .insert_header(("Authorization", bearer_for("user1", &["user"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
