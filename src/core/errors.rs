//! # Application Error Handling System
//!
//! 맥주 카탈로그 서비스 전역에서 사용하는 통합 에러 타입입니다.
//! 모든 계층은 `AppError`를 반환하고, Actix-Web의 `ResponseError` 구현을 통해
//! 핸들러에서 그대로 HTTP 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 쿼리 파라미터, 파싱 불가능한 본문 |
//! | `FieldValidation` | 400 Bad Request | DTO 필드 제약 위반 (필드별 메시지 배열) |
//! | `NotFound` | 404 Not Found | 존재하지 않는 맥주/고객/주문 |
//! | `ConflictError` | 409 Conflict | 낙관적 잠금 버전 불일치 |
//! | `AuthenticationError` | 401 Unauthorized | 자격 증명 누락 또는 불일치 |
//! | `AuthorizationError` | 403 Forbidden | 역할 부족 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 필드 검증 응답 형식
//!
//! `validator` 검증 실패는 위반된 제약마다 하나의 객체를 갖는 JSON 배열로 응답합니다.
//!
//! ```json
//! [
//!   { "beerName": "size must be between 0 and 50" },
//!   { "upc": "must not be blank" }
//! ]
//! ```

use std::collections::BTreeMap;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};
use crate::utils::string_utils::to_camel_case;

/// 단일 필드 제약 위반
///
/// `field`는 API 경계에서 사용하는 camelCase 이름입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error` trait을 구현하고 `actix_web::ResponseError`로
/// HTTP 응답에 매핑됩니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// self.collection::<Beer>().find_one(doc! { "_id": id }).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // DTO 검증 실패 변환
/// payload.validate()?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    ///
    /// 캐시는 보조 저장소이므로 리포지토리는 대부분 이 에러를 삼키고
    /// MongoDB 결과로 응답합니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 필드 단위가 아닌 요청 전체 수준의 문제(잘못된 쿼리 문자열,
    /// JSON 파싱 실패 등)를 나타냅니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// DTO 필드 제약 위반
    ///
    /// 위반된 제약마다 하나의 `FieldViolation`을 가지며,
    /// 응답 본문은 `[{field: message}, ...]` 배열입니다.
    #[error("Validation failed for {} constraint(s)", .0.len())]
    FieldValidation(Vec<FieldViolation>),

    /// 리소스 찾을 수 없음 에러
    ///
    /// # 예제
    /// ```rust,ignore
    /// let beer = beer_repo.find_by_id(&beer_id).await?
    ///     .ok_or_else(|| AppError::NotFound(format!("Beer {} not found", beer_id)))?;
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌 에러
    ///
    /// 다른 요청이 먼저 문서를 갱신해 버전이 맞지 않는 경우(낙관적 잠금)에 발생합니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<ValidationErrors> for AppError {
    /// `validator` 결과를 필드별 위반 목록으로 평탄화합니다.
    ///
    /// 중첩 DTO는 `beerOrderLines[0].orderQuantity` 같은 경로로 표기되며,
    /// 경로 순으로 정렬하여 응답 순서를 고정합니다.
    fn from(errors: ValidationErrors) -> Self {
        let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
        collect_violations(&errors, "", &mut by_field);

        let violations = by_field
            .into_iter()
            .flat_map(|(field, messages)| {
                messages.into_iter().map(move |message| FieldViolation {
                    field: field.clone(),
                    message,
                })
            })
            .collect();

        AppError::FieldValidation(violations)
    }
}

fn collect_violations(
    errors: &ValidationErrors,
    prefix: &str,
    by_field: &mut BTreeMap<String, Vec<String>>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            to_camel_case(field.as_ref())
        } else {
            format!("{}.{}", prefix, to_camel_case(field.as_ref()))
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", path, error.code));
                    by_field.entry(path.clone()).or_default().push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_violations(nested, &path, by_field),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_violations(nested, &format!("{}[{}]", path, index), by_field);
                }
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::FieldValidation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 필드 검증 실패는 필드별 메시지 배열로, 나머지는
    /// `{"error": "..."}` 형식으로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        match self {
            AppError::FieldValidation(violations) => {
                let body: Vec<serde_json::Value> = violations
                    .iter()
                    .map(|v| {
                        let mut entry = serde_json::Map::new();
                        entry.insert(v.field.clone(), serde_json::Value::String(v.message.clone()));
                        serde_json::Value::Object(entry)
                    })
                    .collect();
                actix_web::HttpResponse::build(status).json(body)
            }
            _ => {
                if status.is_server_error() {
                    log::error!("❌ {}", self);
                }
                actix_web::HttpResponse::build(status)
                    .json(serde_json::json!({
                        "error": self.to_string()
                    }))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let file = std::fs::File::open(&path).context("CSV 파일을 열 수 없습니다")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5, message = "beerName too long"))]
        beer_name: String,
        #[validate(required(message = "upc is required"))]
        upc: Option<String>,
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("beerStyle is not a known style".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Beer not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("stale version".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid credentials".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Insufficient permissions".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_are_flattened_per_field() {
        let sample = Sample {
            beer_name: "much too long".to_string(),
            upc: None,
        };

        let error = AppError::from(sample.validate().unwrap_err());

        match error {
            AppError::FieldValidation(violations) => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations[0].field, "beerName");
                assert_eq!(violations[0].message, "beerName too long");
                assert_eq!(violations[1].field, "upc");
            }
            other => panic!("Expected FieldValidation, got {:?}", other),
        }
    }

    #[derive(Validate)]
    struct Line {
        #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
        order_quantity: i32,
    }

    #[derive(Validate)]
    struct Order {
        #[validate(nested)]
        beer_order_lines: Vec<Line>,
    }

    #[test]
    fn test_nested_validation_errors_use_indexed_paths() {
        let order = Order {
            beer_order_lines: vec![Line { order_quantity: 2 }, Line { order_quantity: 0 }],
        };

        match AppError::from(order.validate().unwrap_err()) {
            AppError::FieldValidation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "beerOrderLines[1].orderQuantity");
                assert_eq!(violations[0].message, "must be greater than or equal to 1");
            }
            other => panic!("Expected FieldValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_field_validation_body_is_array() {
        let error = AppError::FieldValidation(vec![FieldViolation {
            field: "beerName".to_string(),
            message: "too long".to_string(),
        }]);

        let response = error.error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let bytes = response.into_body().try_into_bytes().unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!([{ "beerName": "too long" }]));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
