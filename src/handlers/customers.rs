//! # Customer HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/customers` | 전체 목록 (이름순) | 200 |
//! | `GET` | `/api/v1/customers/{customerId}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/v1/customers` | 생성 | 201 / 400 |
//! | `PUT` | `/api/v1/customers/{customerId}` | 전체 수정 | 200 / 400 / 404 |
//! | `PATCH` | `/api/v1/customers/{customerId}` | 부분 수정 | 200 / 400 / 404 |
//! | `DELETE` | `/api/v1/customers/{customerId}` | 삭제 | 200 / 404 / 409 |

use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::CustomerDto;
use crate::handlers::created_at;
use crate::services::customers::CustomerService;

pub const CUSTOMER_PATH: &str = "/api/v1/customers";

#[get("")]
pub async fn list_customers() -> Result<HttpResponse, AppError> {
    let customers = CustomerService::instance().list_customers().await?;
    Ok(HttpResponse::Ok().json(customers))
}

#[get("/{customer_id}")]
pub async fn get_customer(
    customer_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let customer = CustomerService::instance()
        .get_customer(customer_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[post("")]
pub async fn create_customer(
    payload: web::Json<CustomerDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let created = CustomerService::instance()
        .create_customer(payload.into_inner())
        .await?;
    Ok(created_at(CUSTOMER_PATH, created.id, &created))
}

#[put("/{customer_id}")]
pub async fn update_customer(
    customer_id: web::Path<Uuid>,
    payload: web::Json<CustomerDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    CustomerService::instance()
        .update_customer(customer_id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[patch("/{customer_id}")]
pub async fn patch_customer(
    customer_id: web::Path<Uuid>,
    payload: web::Json<CustomerDto>,
) -> Result<HttpResponse, AppError> {
    CustomerService::instance()
        .patch_customer(customer_id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[delete("/{customer_id}")]
pub async fn delete_customer(
    customer_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    CustomerService::instance()
        .delete_customer(customer_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_customer_with_bad_email_returns_400() {
        let app = test::init_service(
            App::new().service(web::scope(CUSTOMER_PATH).service(create_customer)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CUSTOMER_PATH)
            .set_json(serde_json::json!({ "name": "Pan Oleg", "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!([{ "email": "must be a well-formed email address" }])
        );
    }

    #[actix_web::test]
    async fn test_create_customer_with_blank_name_returns_400() {
        let app = test::init_service(
            App::new().service(web::scope(CUSTOMER_PATH).service(create_customer)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(CUSTOMER_PATH)
            .set_json(serde_json::json!({ "name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
