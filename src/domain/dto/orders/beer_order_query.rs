use serde::Deserialize;
use uuid::Uuid;

/// `GET /api/v1/beerorders?customerId=...`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderListQuery {
    pub customer_id: Option<Uuid>,
}
