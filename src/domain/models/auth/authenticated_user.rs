use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 자격 증명이 제시된 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    /// `Authorization: Basic ...`
    Basic,
    /// `Authorization: Bearer <jwt>`
    Bearer,
}

/// 인증 미들웨어가 요청 확장에 저장하는 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 이름 (Basic 사용자 이름 또는 JWT `sub`)
    pub username: String,

    pub auth_method: AuthMethod,

    /// 사용자 역할 목록
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            username: "user1".to_string(),
            auth_method: AuthMethod::Basic,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_role_checks() {
        let admin = user(&["user", "admin"]);
        assert!(admin.has_role("admin"));

        let plain = user(&["user"]);
        assert!(plain.has_role("user"));
        assert!(!plain.has_role("admin"));
    }

    #[actix_web::test]
    async fn test_extract_from_request_extensions() {
        let req = TestRequest::default().to_http_request();
        assert!(AuthenticatedUser::extract(&req).await.is_err());

        req.extensions_mut().insert(user(&["user"]));
        let extracted = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(extracted.username, "user1");
    }
}
