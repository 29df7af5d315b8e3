//! 인증 모델

pub mod authenticated_user;
pub mod authentication_request;

pub use authenticated_user::{AuthMethod, AuthenticatedUser};
pub use authentication_request::RequiredRole;
