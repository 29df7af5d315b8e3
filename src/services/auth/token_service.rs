//! JWT 토큰 관리 서비스 구현
//!
//! HTTP Basic으로 인증한 사용자에게 HS256 액세스 토큰을 발급하고,
//! 이후 요청의 Bearer 토큰을 검증합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult},
    domain::{
        dto::TokenResponse,
        models::{AuthMethod, AuthenticatedUser, TokenClaims},
    },
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하며 유효 기간은 `JWT_EXPIRATION_HOURS`(기본 24시간)입니다.
#[service(name = "token")]
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 인증된 사용자를 위한 액세스 토큰 발급
    ///
    /// ```rust,ignore
    /// let response = token_service.issue_token(&user)?;
    /// assert_eq!(response.token_type, "Bearer");
    /// ```
    pub fn issue_token(&self, user: &AuthenticatedUser) -> AppResult<TokenResponse> {
        let hours = JwtConfig::expiration_hours();
        let claims = claims_for(user, hours);
        let access_token = encode_claims(&claims, &JwtConfig::secret())?;

        log::info!("🔑 토큰 발급: {}", user.username);

        Ok(TokenResponse::bearer(access_token, hours * 3600))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        decode_claims(token, &JwtConfig::secret())
    }

    /// Bearer 토큰을 검증해 인증 사용자로 변환합니다.
    pub fn authenticate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let claims = self.verify_token(token)?;

        Ok(AuthenticatedUser {
            username: claims.sub,
            auth_method: AuthMethod::Bearer,
            roles: claims.roles,
        })
    }

    /// `Bearer {token}` 형식에서 토큰 부분만 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

fn claims_for(user: &AuthenticatedUser, expiration_hours: i64) -> TokenClaims {
    let now = Utc::now();
    let expiration = now + Duration::hours(expiration_hours);

    TokenClaims {
        sub: user.username.clone(),
        roles: user.roles.clone(),
        iat: now.timestamp(),
        exp: expiration.timestamp(),
    }
}

fn encode_claims(claims: &TokenClaims, secret: &str) -> AppResult<String> {
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
}

fn decode_claims(token: &str, secret: &str) -> AppResult<TokenClaims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    decode::<TokenClaims>(token, &decoding_key, &Validation::default())
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            }
            _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            username: "user1".to_string(),
            auth_method: AuthMethod::Basic,
            roles: vec!["user".to_string()],
        }
    }

    #[test]
    fn test_claims_round_trip() {
        let claims = claims_for(&user(), 1);
        let token = encode_claims(&claims, SECRET).unwrap();

        let decoded = decode_claims(&token, SECRET).unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(decoded.exp - decoded.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = encode_claims(&claims_for(&user(), 1), SECRET).unwrap();

        let result = decode_claims(&token, "another-secret");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let mut claims = claims_for(&user(), 1);
        claims.iat -= 7200;
        claims.exp = Utc::now().timestamp() - 3600;
        let token = encode_claims(&claims, SECRET).unwrap();

        match decode_claims(&token, SECRET) {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            decode_claims("not.a.jwt", SECRET),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService {};

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic dXNlcjE6cGFzc3dvcmQ=").is_err());
        assert!(service.extract_bearer_token("Bearer   ").is_err());
    }

    #[test]
    fn test_issue_then_authenticate() {
        let service = TokenService {};

        let response = service.issue_token(&user()).unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert!(response.expires_in > 0);

        let authenticated = service.authenticate(&response.access_token).unwrap();
        assert_eq!(authenticated.username, "user1");
        assert_eq!(authenticated.auth_method, AuthMethod::Bearer);
        assert_eq!(authenticated.roles, vec!["user".to_string()]);
    }
}
