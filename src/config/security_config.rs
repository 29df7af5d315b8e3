//! # Security Configuration Module
//!
//! API를 보호하는 두 가지 자격 증명 방식의 설정을 관리합니다.
//!
//! 1. **HTTP Basic**: 설정 파일에 정의된 단일 서비스 사용자
//! 2. **JWT Bearer**: `POST /api/v1/auth/token`으로 발급받은 HS256 토큰
//!
//! ```bash
//! export SECURITY_USER_NAME="user1"
//! export SECURITY_USER_PASSWORD="password"      # 평문 또는 bcrypt 해시($2...)
//! export SECURITY_USER_ROLES="user,admin"
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

/// HTTP Basic 사용자 설정
pub struct SecurityConfig;

impl SecurityConfig {
    pub fn username() -> String {
        env::var("SECURITY_USER_NAME").unwrap_or_else(|_| {
            log::warn!("SECURITY_USER_NAME not set, using default (not secure for production!)");
            "user1".to_string()
        })
    }

    /// 평문이면 시작 시 bcrypt로 해시되고, `$2`로 시작하면 이미 해시된 값으로 취급합니다.
    pub fn password() -> String {
        env::var("SECURITY_USER_PASSWORD").unwrap_or_else(|_| {
            log::warn!("SECURITY_USER_PASSWORD not set, using default (not secure for production!)");
            "password".to_string()
        })
    }

    pub fn roles() -> Vec<String> {
        parse_roles(&env::var("SECURITY_USER_ROLES").unwrap_or_else(|_| "user".to_string()))
    }
}

fn parse_roles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|role| role.trim().to_lowercase())
        .filter(|role| !role.is_empty())
        .collect()
}

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roles() {
        assert_eq!(parse_roles("user"), vec!["user".to_string()]);
        assert_eq!(
            parse_roles(" User , admin ,, "),
            vec!["user".to_string(), "admin".to_string()]
        );
        assert!(parse_roles("").is_empty());
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }
}
