//! # 맥주 DTO
//!
//! 생성(POST)과 전체 수정(PUT)은 검증을 통과해야 하며,
//! 부분 수정(PATCH)은 값이 있고 공백이 아닌 필드만 반영합니다.
//!
//! ```json
//! {
//!   "beerName": "Lager Classic",
//!   "beerStyle": "LAGER",
//!   "upc": "12324",
//!   "quantityOnHand": 10,
//!   "price": 56.79
//! }
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::{AppError, AppResult, FieldViolation};
use crate::domain::dto::{to_utc, to_uuid, validate_not_blank};
use crate::domain::entities::{Beer, BeerStyle};
use crate::utils::string_utils::non_blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default)]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub version: Option<i32>,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        length(max = 50, message = "size must be between 0 and 50"),
        custom(function = "validate_not_blank")
    )]
    pub beer_name: Option<String>,

    #[serde(default)]
    #[validate(required(message = "must not be null"))]
    pub beer_style: Option<BeerStyle>,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        length(max = 255, message = "size must be between 0 and 255"),
        custom(function = "validate_not_blank")
    )]
    pub upc: Option<String>,

    #[serde(default)]
    pub quantity_on_hand: Option<i32>,

    /// JSON에서는 숫자로 주고받습니다.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(required(message = "must not be null"))]
    pub price: Option<Decimal>,

    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
}

/// 검증을 통과한 DTO에서 꺼낸 필수 값들
struct RequiredBeerFields {
    beer_name: String,
    beer_style: BeerStyle,
    upc: String,
    price: Decimal,
}

impl BeerDto {
    /// 재고 수량을 숨긴 사본 (`showInventory=false`)
    pub fn without_inventory(mut self) -> Self {
        self.quantity_on_hand = None;
        self
    }

    /// 전체 수정(PUT): 이름, 스타일, 가격, UPC, 재고를 모두 교체합니다.
    pub fn apply_update(&self, beer: &mut Beer) -> AppResult<()> {
        let fields = self.required_fields()?;

        beer.beer_name = fields.beer_name;
        beer.beer_style = fields.beer_style;
        beer.upc = fields.upc;
        beer.price = fields.price;
        beer.quantity_on_hand = self.quantity_on_hand;

        Ok(())
    }

    /// 부분 수정(PATCH): 값이 있는 필드만 반영합니다.
    ///
    /// 이름과 UPC는 공백이 아닐 때만 반영됩니다. 하나라도 바뀌면 `true`
    pub fn apply_patch(&self, beer: &mut Beer) -> bool {
        let mut changed = false;

        if let Some(name) = non_blank(&self.beer_name) {
            beer.beer_name = name.to_string();
            changed = true;
        }
        if let Some(style) = self.beer_style {
            beer.beer_style = style;
            changed = true;
        }
        if let Some(quantity) = self.quantity_on_hand {
            beer.quantity_on_hand = Some(quantity);
            changed = true;
        }
        if let Some(price) = self.price {
            beer.price = price;
            changed = true;
        }
        if let Some(upc) = non_blank(&self.upc) {
            beer.upc = upc.to_string();
            changed = true;
        }

        changed
    }

    fn required_fields(&self) -> AppResult<RequiredBeerFields> {
        let mut missing = Vec::new();

        let beer_name = non_blank(&self.beer_name).map(str::to_string);
        if beer_name.is_none() {
            missing.push(missing_field("beerName"));
        }
        if self.beer_style.is_none() {
            missing.push(missing_field("beerStyle"));
        }
        let upc = non_blank(&self.upc).map(str::to_string);
        if upc.is_none() {
            missing.push(missing_field("upc"));
        }
        if self.price.is_none() {
            missing.push(missing_field("price"));
        }

        match (beer_name, self.beer_style, upc, self.price) {
            (Some(beer_name), Some(beer_style), Some(upc), Some(price)) => Ok(RequiredBeerFields {
                beer_name,
                beer_style,
                upc,
                price,
            }),
            _ => Err(AppError::FieldValidation(missing)),
        }
    }
}

fn missing_field(field: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        message: "must not be null".to_string(),
    }
}

impl TryFrom<BeerDto> for Beer {
    type Error = AppError;

    /// 새 맥주를 만듭니다. 요청의 `id`, `version`, 시각 값은 무시됩니다.
    fn try_from(dto: BeerDto) -> Result<Self, Self::Error> {
        let fields = dto.required_fields()?;

        Ok(Beer::new(
            fields.beer_name,
            fields.beer_style,
            fields.upc,
            fields.price,
            dto.quantity_on_hand,
        ))
    }
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: to_uuid(&beer.id),
            version: Some(beer.version),
            beer_name: Some(beer.beer_name),
            beer_style: Some(beer.beer_style),
            upc: Some(beer.upc),
            quantity_on_hand: beer.quantity_on_hand,
            price: Some(beer.price),
            created_date: Some(to_utc(beer.created_date)),
            update_date: Some(to_utc(beer.update_date)),
        }
    }
}
