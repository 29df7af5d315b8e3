//! # Beer Order HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/beerorders?customerId=` | 목록 | 200 |
//! | `GET` | `/api/v1/beerorders/{orderId}` | 단건 조회 | 200 / 404 |
//! | `POST` | `/api/v1/beerorders` | 생성 | 201 / 400 / 404 |
//! | `PATCH` | `/api/v1/beerorders/{orderId}/shipment` | 운송장 번호 설정 | 200 / 400 / 404 |
//! | `DELETE` | `/api/v1/beerorders/{orderId}` | 삭제 | 200 / 404 |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::{BeerOrderDto, BeerOrderListQuery, BeerOrderShipmentDto};
use crate::handlers::created_at;
use crate::services::orders::BeerOrderService;

pub const BEER_ORDER_PATH: &str = "/api/v1/beerorders";

#[get("")]
pub async fn list_orders(
    query: web::Query<BeerOrderListQuery>,
) -> Result<HttpResponse, AppError> {
    let orders = BeerOrderService::instance().list_orders(&query).await?;
    Ok(HttpResponse::Ok().json(orders))
}

#[get("/{order_id}")]
pub async fn get_order(
    order_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order = BeerOrderService::instance()
        .get_order(order_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(order))
}

#[post("")]
pub async fn create_order(
    payload: web::Json<BeerOrderDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let created = BeerOrderService::instance()
        .create_order(payload.into_inner())
        .await?;
    Ok(created_at(BEER_ORDER_PATH, created.id, &created))
}

#[patch("/{order_id}/shipment")]
pub async fn ship_order(
    order_id: web::Path<Uuid>,
    payload: web::Json<BeerOrderShipmentDto>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    BeerOrderService::instance()
        .ship_order(order_id.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[delete("/{order_id}")]
pub async fn delete_order(
    order_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    BeerOrderService::instance()
        .delete_order(order_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_create_order_reports_nested_line_errors() {
        let app = test::init_service(
            App::new().service(web::scope(BEER_ORDER_PATH).service(create_order)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(BEER_ORDER_PATH)
            .set_json(serde_json::json!({
                "customerId": Uuid::new_v4(),
                "beerOrderLines": [
                    { "beerId": Uuid::new_v4(), "orderQuantity": 0 }
                ]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!([
                { "beerOrderLines[0].orderQuantity": "must be greater than or equal to 1" }
            ])
        );
    }

    #[actix_web::test]
    async fn test_blank_tracking_number_returns_400() {
        let app = test::init_service(
            App::new().service(web::scope(BEER_ORDER_PATH).service(ship_order)),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri(&format!("{}/{}/shipment", BEER_ORDER_PATH, Uuid::new_v4()))
            .set_json(serde_json::json!({ "trackingNumber": " " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
