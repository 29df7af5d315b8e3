//! 카테고리 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::core::errors::{AppError, FieldViolation};
use crate::domain::dto::{to_utc, to_uuid, validate_not_blank};
use crate::domain::entities::Category;
use crate::utils::string_utils::non_blank;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
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
    pub description: Option<String>,

    /// 연결된 맥주 ID (응답 전용)
    #[serde(default, skip_deserializing)]
    pub beer_ids: Vec<Uuid>,

    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub update_date: Option<DateTime<Utc>>,
}

impl TryFrom<CategoryDto> for Category {
    type Error = AppError;

    fn try_from(dto: CategoryDto) -> Result<Self, Self::Error> {
        let description = non_blank(&dto.description).ok_or_else(|| {
            AppError::FieldValidation(vec![FieldViolation {
                field: "description".to_string(),
                message: "must not be null".to_string(),
            }])
        })?;

        Ok(Category::new(description.to_string()))
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: to_uuid(&category.id),
            version: Some(category.version),
            description: Some(category.description),
            beer_ids: category.beer_ids.iter().filter_map(|id| to_uuid(id)).collect(),
            created_date: Some(to_utc(category.created_date)),
            update_date: Some(to_utc(category.update_date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_limits() {
        let dto = CategoryDto {
            description: Some("x".repeat(51)),
            ..Default::default()
        };
        assert!(dto.validate().is_err());

        let dto = CategoryDto {
            description: Some("Seasonal".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_beer_ids_are_ignored_on_input() {
        let dto: CategoryDto = serde_json::from_str(
            r#"{"description":"Seasonal","beerIds":["0b6b4f3c-6c2e-4a53-9d0b-0d6b6f3f7a11"]}"#,
        )
        .unwrap();
        assert!(dto.beer_ids.is_empty());

        let category = Category::try_from(dto).unwrap();
        assert_eq!(category.description, "Seasonal");
        assert!(category.beer_ids.is_empty());
    }
}
