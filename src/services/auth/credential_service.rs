//! # 자격 증명 검증 서비스
//!
//! `Authorization` 헤더를 해석해 [`AuthenticatedUser`]를 만듭니다.
//!
//! ## HTTP Basic
//!
//! 설정된 단일 사용자(`SECURITY_USER_NAME` / `SECURITY_USER_PASSWORD`)와 비교합니다.
//! 평문 비밀번호는 첫 검증 시점에 한 번만 bcrypt로 해시되고,
//! `$2`로 시작하는 값은 이미 해시된 것으로 보고 그대로 사용합니다.

use std::sync::Arc;
use base64::{engine::general_purpose::STANDARD, Engine};
use once_cell::sync::OnceCell;
use singleton_macro::service;
use crate::{
    config::{PasswordConfig, SecurityConfig},
    core::errors::{AppError, AppResult},
    domain::models::{AuthMethod, AuthenticatedUser},
    services::auth::TokenService,
};

#[service(name = "credential")]
pub struct CredentialService {
    token_service: Arc<TokenService>,
    /// 설정된 비밀번호의 bcrypt 해시 (지연 계산)
    password_hash: OnceCell<String>,
}

impl CredentialService {
    /// `Basic` 또는 `Bearer` 헤더 값을 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 알 수 없는 방식, 잘못된 형식, 자격 증명 불일치
    pub fn authenticate(&self, auth_header: &str) -> AppResult<AuthenticatedUser> {
        let auth_header = auth_header.trim();

        if auth_header.starts_with("Bearer ") {
            let token = self.token_service.extract_bearer_token(auth_header)?;
            return self.token_service.authenticate(token);
        }

        if let Some(encoded) = auth_header.strip_prefix("Basic ") {
            let (username, password) = parse_basic_credentials(encoded)?;
            return self.verify_basic(&username, &password);
        }

        Err(AppError::AuthenticationError("지원하지 않는 인증 방식입니다".to_string()))
    }

    /// HTTP Basic 사용자 이름과 비밀번호를 설정값과 비교합니다.
    pub fn verify_basic(&self, username: &str, password: &str) -> AppResult<AuthenticatedUser> {
        let password_matches = bcrypt::verify(password, self.password_hash()?)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        // 사용자 이름이 달라도 해시 비교는 수행한다
        if username != SecurityConfig::username() || !password_matches {
            log::warn!("🚫 Basic 인증 실패: {}", username);
            return Err(AppError::AuthenticationError("잘못된 사용자 이름 또는 비밀번호입니다".to_string()));
        }

        Ok(AuthenticatedUser {
            username: username.to_string(),
            auth_method: AuthMethod::Basic,
            roles: SecurityConfig::roles(),
        })
    }

    fn password_hash(&self) -> AppResult<&str> {
        self.password_hash
            .get_or_try_init(|| {
                let configured = SecurityConfig::password();
                if is_bcrypt_hash(&configured) {
                    return Ok(configured);
                }

                let start = std::time::Instant::now();
                let hashed = bcrypt::hash(&configured, PasswordConfig::bcrypt_cost())
                    .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
                log::info!("Password hashing took: {:?}", start.elapsed());

                Ok(hashed)
            })
            .map(String::as_str)
    }
}

fn is_bcrypt_hash(value: &str) -> bool {
    value.starts_with("$2")
}

/// `base64(user:password)`를 사용자 이름과 비밀번호로 나눕니다.
///
/// 비밀번호에는 `:`가 들어갈 수 있으므로 첫 번째 `:`에서만 나눕니다.
fn parse_basic_credentials(encoded: &str) -> AppResult<(String, String)> {
    let invalid = || AppError::AuthenticationError("잘못된 Basic 인증 헤더입니다".to_string());

    let decoded = STANDARD.decode(encoded.trim()).map_err(|_| invalid())?;
    let decoded = String::from_utf8(decoded).map_err(|_| invalid())?;

    let (username, password) = decoded.split_once(':').ok_or_else(invalid)?;
    if username.is_empty() {
        return Err(invalid());
    }

    Ok((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        STANDARD.encode(raw)
    }

    #[test]
    fn test_parse_basic_credentials() {
        let (username, password) = parse_basic_credentials(&encode("user1:password")).unwrap();
        assert_eq!(username, "user1");
        assert_eq!(password, "password");
    }

    #[test]
    fn test_parse_basic_credentials_keeps_colons_in_password() {
        let (username, password) = parse_basic_credentials(&encode("user1:pa:ss")).unwrap();
        assert_eq!(username, "user1");
        assert_eq!(password, "pa:ss");
    }

    #[test]
    fn test_parse_basic_credentials_rejects_malformed_values() {
        assert!(parse_basic_credentials("%%%not-base64").is_err());
        assert!(parse_basic_credentials(&encode("no-colon")).is_err());
        assert!(parse_basic_credentials(&encode(":password")).is_err());
    }

    #[test]
    fn test_is_bcrypt_hash() {
        let hashed = bcrypt::hash("password", 4).unwrap();
        assert!(is_bcrypt_hash(&hashed));
        assert!(!is_bcrypt_hash("password"));
    }

    #[test]
    fn test_unknown_scheme_is_rejected() {
        let service = CredentialService {
            token_service: Arc::new(TokenService {}),
            password_hash: OnceCell::new(),
        };

        assert!(matches!(
            service.authenticate("Digest username=\"user1\""),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_verify_basic_against_precomputed_hash() {
        let service = CredentialService {
            token_service: Arc::new(TokenService {}),
            password_hash: OnceCell::with_value(bcrypt::hash("password", 4).unwrap()),
        };
        let username = SecurityConfig::username();

        let user = service.verify_basic(&username, "password").unwrap();
        assert_eq!(user.username, username);
        assert_eq!(user.auth_method, AuthMethod::Basic);

        assert!(matches!(
            service.verify_basic(&username, "wrong"),
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            service.verify_basic("somebody-else", "password"),
            Err(AppError::AuthenticationError(_))
        ));
    }
}
