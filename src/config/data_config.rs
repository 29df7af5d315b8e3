//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 요청 제한, CORS, 비밀번호 해시 강도, 부트스트랩 데이터 설정을 관리합니다.

use std::env;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 환경을 결정합니다. 기본값은 Production입니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해시 설정
///
/// HTTP Basic 사용자의 비밀번호를 시작 시점에 한 번 해시할 때 사용합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// `BCRYPT_COST`(4-15)가 유효하면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 속도 제한 설정 (`actix-governor`)
///
/// ```bash
/// RATE_LIMIT_PER_SECOND=20   # .env.dev
/// RATE_LIMIT_BURST_SIZE=40
/// ```
pub struct RateLimitConfig;

impl RateLimitConfig {
    /// 토큰 보충 주기 (초당 요청 수, 기본값 100)
    pub fn per_second() -> u64 {
        parse_or("RATE_LIMIT_PER_SECOND", 100)
    }

    /// 한 번에 허용되는 요청 수 (기본값 200)
    pub fn burst_size() -> u32 {
        parse_or("RATE_LIMIT_BURST_SIZE", 200)
    }
}

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:8080,http://127.0.0.1:8080";

pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)
    pub fn allowed_origins() -> Vec<String> {
        split_list(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()))
    }
}

/// 시작 시 샘플 데이터 적재 설정
pub struct BootstrapConfig;

impl BootstrapConfig {
    /// `BOOTSTRAP_ENABLED` (기본값 true)
    pub fn enabled() -> bool {
        env::var("BOOTSTRAP_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true)
    }

    /// 맥주 CSV 파일 경로 (`BEER_CSV_PATH`)
    pub fn csv_path() -> String {
        env::var("BEER_CSV_PATH").unwrap_or_else(|_| "resources/csvdata/beer.csv".to_string())
    }
}

/// 값이 없으면 기본값, 해석할 수 없으면 경고 후 기본값
fn parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() {
            assert_eq!(RateLimitConfig::per_second(), 100);
        }
        if env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(RateLimitConfig::burst_size(), 200);
        }
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(split_list(DEFAULT_CORS_ORIGINS).len(), 4);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
