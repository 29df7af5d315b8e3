//! # Authentication HTTP Handlers
//!
//! HTTP Basic으로 인증한 사용자에게 Bearer 토큰을 발급합니다.
//!
//! ```bash
//! curl -u user1:password -X POST http://127.0.0.1:8080/api/v1/auth/token
//! # {"accessToken":"eyJ...","tokenType":"Bearer","expiresIn":86400}
//!
//! curl -H "Authorization: Bearer eyJ..." http://127.0.0.1:8080/api/v1/beer
//! ```

use actix_web::{post, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::models::{AuthMethod, AuthenticatedUser};
use crate::services::auth::TokenService;

/// `POST /api/v1/auth/token`
///
/// Bearer 토큰으로 다시 토큰을 받는 것은 허용하지 않습니다.
#[post("/token")]
pub async fn issue_token(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    if user.auth_method != AuthMethod::Basic {
        return Err(AppError::AuthenticationError(
            "토큰 발급에는 Basic 자격 증명이 필요합니다".to_string(),
        ));
    }

    let response = TokenService::instance().issue_token(&user)?;
    Ok(HttpResponse::Ok().json(response))
}
