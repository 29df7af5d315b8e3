use serde::{Deserialize, Serialize};

/// `POST /api/v1/auth/token` 응답
///
/// ```json
/// { "accessToken": "eyJ...", "tokenType": "Bearer", "expiresIn": 86400 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
