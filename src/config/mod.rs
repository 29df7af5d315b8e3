//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 타입이 있는 정적 접근자로 제공합니다.
//! 값은 `PROFILE`에 따라 `.env.dev` / `.env.prod`에서 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 요청 제한, CORS, 비밀번호 해시, 부트스트랩 설정
//! - [`security_config`] - HTTP Basic 사용자, JWT 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig, BootstrapConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let secret = JwtConfig::secret();
//! let csv = BootstrapConfig::csv_path();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! HOST="127.0.0.1"
//! PORT="8080"
//! RATE_LIMIT_PER_SECOND="100"
//! RATE_LIMIT_BURST_SIZE="200"
//! CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//!
//! # 인증
//! SECURITY_USER_NAME="user1"
//! SECURITY_USER_PASSWORD="password"
//! JWT_SECRET="change-me"
//! JWT_EXPIRATION_HOURS="24"
//!
//! # 부트스트랩
//! BOOTSTRAP_ENABLED="true"
//! BEER_CSV_PATH="resources/csvdata/beer.csv"
//! ```

pub mod data_config;
pub mod security_config;

pub use data_config::*;
pub use security_config::*;

/// 로드된 실행 프로필
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: String,
    /// 실제로 읽은 파일. 없으면 이미 설정된 환경 변수만 사용합니다.
    pub env_file: Option<&'static str>,
}

/// `PROFILE`에 맞는 `.env` 파일을 환경 변수로 로드합니다.
///
/// | PROFILE | 파일 |
/// |---------|------|
/// | `dev` (기본값) | `.env.dev` |
/// | `prod` | `.env.prod` |
/// | 그 외 | `.env` |
///
/// 로거보다 먼저 호출되므로 결과는 호출자가 출력합니다.
pub fn load_profile_env() -> LoadedProfile {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let env_file = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").ok().map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").ok().map(|_| ".env.dev"),
        _ => dotenv::dotenv().ok().map(|_| ".env"),
    };

    LoadedProfile { profile, env_file }
}
