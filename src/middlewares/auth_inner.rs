//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::AppError;
use crate::domain::models::{AuthenticatedUser, RequiredRole};
use crate::services::auth::CredentialService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate_request(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {} {} ({})", req.method(), req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .insert_header(("WWW-Authenticate", "Basic realm=\"beer-service\""))
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 Basic 자격 증명 또는 Bearer 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            };

            if let Some(ref required) = required_role {
                if !required.is_satisfied(&user) {
                    log::warn!("권한 부족: 사용자 {} ({:?}), 필요 권한: {:?}",
                        user.username, user.roles, required);
                    let response = HttpResponse::Forbidden()
                        .json(serde_json::json!({
                            "error": "insufficient_permissions",
                            "message": "접근 권한이 부족합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            log::debug!("인증 성공: 사용자 {} ({:?})", user.username, user.auth_method);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization` 헤더를 검증해 사용자 정보를 만듭니다.
fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    CredentialService::instance().authenticate(auth_header)
}
