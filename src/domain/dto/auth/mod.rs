//! 인증 DTO

pub mod token_response;

pub use token_response::TokenResponse;
