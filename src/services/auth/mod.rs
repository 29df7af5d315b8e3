//! 인증 서비스 모듈
//!
//! API는 두 가지 자격 증명을 받습니다.
//!
//! - `Authorization: Basic base64(user:password)` → [`CredentialService`]
//! - `Authorization: Bearer <jwt>` → [`TokenService`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::CredentialService;
//!
//! let user = CredentialService::instance().authenticate(auth_header)?;
//! ```

pub mod token_service;
pub mod credential_service;

pub use token_service::*;
pub use credential_service::*;
